#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentEnvironment {
    Local,
    Dev,
    Staging,
    Prod,
}

impl DeploymentEnvironment {
    pub fn from_env() -> Self {
        match std::env::var("CURR_ENV").as_deref() {
            Ok(s) => match s.to_ascii_lowercase().as_str() {
                "local" | "localhost" => DeploymentEnvironment::Local,
                "dev" | "develop" | "development" => DeploymentEnvironment::Dev,
                "staging" | "stage" | "stg" => DeploymentEnvironment::Staging,
                "prd" | "prod" | "production" => DeploymentEnvironment::Prod,
                _ => DeploymentEnvironment::Local,
            },
            Err(_) => DeploymentEnvironment::Prod,
        }
    }
}
