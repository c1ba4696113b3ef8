use super::Email;

pub fn welcome(to: &str) -> Email {
    Email {
        to: to.to_string(),
        subject: "Welcome!".to_string(),
        text: "Thanks for registering!".to_string(),
        html: "<strong>Thanks for registering!</strong>".to_string(),
    }
}
