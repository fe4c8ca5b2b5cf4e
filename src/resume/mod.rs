pub mod rules;
pub mod source;

use serde::Serialize;

use rules::{DESCRIPTION_RULE, EMAIL_RULE, JOB_STATUS_RULE, NAME_RULE, PHONE_RULE};

/// The five profile fields pulled out of a resume's text. Every field is
/// either a pattern match or the literal "Not Found", never absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub job_status: String,
    pub description: String,
}

/// Run the five field rules over the text. Pure function: no I/O, never
/// fails, and a miss on one field has no effect on the others.
pub fn extract(text: &str) -> ResumeProfile {
    ResumeProfile {
        name: NAME_RULE.apply(text),
        email: EMAIL_RULE.apply(text),
        phone: PHONE_RULE.apply(text),
        job_status: JOB_STATUS_RULE.apply(text),
        description: DESCRIPTION_RULE.apply(text),
    }
}
