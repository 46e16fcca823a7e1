use init::server_init::server_init_proc;
use mimalloc::MiMalloc;
use tracing::info;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

// modules tree
pub mod build_info;
pub mod docs;
pub mod schema;
pub mod domain {
    pub mod auth {
        pub mod policy;
        pub mod role;
        pub mod user;
    }
    pub mod blog {
        pub mod blog;
    }
}
pub mod dto {
    pub mod requests {
        pub mod auth {
            pub mod login_request;
            pub mod signup_request;
        }
        pub mod blog {
            pub mod submit_comment_request;
            pub mod submit_post_request;
            pub mod update_post_request;
        }
        pub mod contact {
            pub mod contact_request;
        }
    }
    pub mod responses {
        pub mod response_data;
        pub mod response_meta;
        pub mod auth {
            pub mod login_response;
            pub mod signup_response;
        }
        pub mod blog {
            pub mod delete_comment_response;
            pub mod delete_post_response;
            pub mod get_posts_response;
            pub mod read_post_response;
            pub mod submit_comment_response;
            pub mod submit_post_response;
        }
        pub mod contact {
            pub mod contact_response;
        }
    }
}
pub mod errors {
    pub mod code_error;
}
pub mod handlers {
    pub mod fallback;
    pub mod auth {
        pub mod login;
        pub mod logout;
        pub mod signup;
    }
    pub mod blog {
        pub mod delete_comment;
        pub mod delete_post;
        pub mod get_posts;
        pub mod read_post;
        pub mod submit_comment;
        pub mod submit_post;
        pub mod update_post;
    }
    pub mod contact {
        pub mod send_contact_message;
    }
    pub mod server {
        pub mod healthcheck;
    }
}
pub mod init {
    pub mod config;
    pub mod server_init;
    pub mod state;
}
pub mod routers {
    pub mod main_router;
    pub mod middleware {
        pub mod auth;
        pub mod is_logged_in;
        pub mod logging;
    }
}
pub mod util {
    pub mod auth {
        pub mod actor_role;
        pub mod ensure_first_admin;
    }
    pub mod crypto {
        pub mod hash_pw;
        pub mod verify_pw;
    }
    pub mod email {
        pub mod emails;
    }
    pub mod string {
        pub mod validations;
    }
    pub mod time {
        pub mod now;
    }
}

// main function
#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let start = tokio::time::Instant::now();
    tracing_subscriber::fmt().init();

    info!("Initializing server...");
    server_init_proc(start).await?;

    Ok(())
}
