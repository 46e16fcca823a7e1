/// Contact-form message composed into an email for the site operator.
pub struct ContactMessageEmail {
    pub body: String,
}

impl ContactMessageEmail {
    pub fn new(name: &str, email: &str, phone: Option<&str>, message: &str) -> Self {
        let phone = phone.unwrap_or("No phone number provided");
        let body = format!(
            "{message}\n\nMessage From:\n    {name}\n    {email}\n    {phone}\n"
        );

        ContactMessageEmail { body }
    }

    pub fn to_message(self, operator_email: &str) -> anyhow::Result<lettre::Message> {
        Ok(lettre::Message::builder()
            .from("Blog Contact Form <donotreply@blog.localhost>".parse()?)
            .to(operator_email.parse()?)
            .subject("New contact form message")
            .header(lettre::message::header::ContentType::TEXT_PLAIN)
            .body(self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_phone_gets_placeholder() {
        let email = ContactMessageEmail::new("Ann", "a@x.com", None, "Hello there");
        assert!(email.body.contains("Hello there"));
        assert!(email.body.contains("No phone number provided"));
    }
}
