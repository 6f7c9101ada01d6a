use mailparse::{MailHeaderMap, MailParseError, ParsedMail};

/// What the scanner needs out of a raw message: the subject (may be absent)
/// and the best available text body.
pub struct MailContent {
    pub subject: Option<String>,
    pub body: String,
}

pub fn parse_message(raw: &[u8]) -> Result<MailContent, MailParseError> {
    let parsed = mailparse::parse_mail(raw)?;
    let subject = parsed.headers.get_first_value("Subject");
    let body = best_body(&parsed)?;

    Ok(MailContent { subject, body })
}

/// Prefer the HTML part, fall back to plain text, then to whatever the
/// top-level body decodes to.
fn best_body(mail: &ParsedMail<'_>) -> Result<String, MailParseError> {
    if let Some(part) = find_part(mail, "text/html") {
        return part.get_body();
    }
    if let Some(part) = find_part(mail, "text/plain") {
        return part.get_body();
    }
    mail.get_body()
}

fn find_part<'a, 'b>(mail: &'a ParsedMail<'b>, mimetype: &str) -> Option<&'a ParsedMail<'b>> {
    if mail.ctype.mimetype.eq_ignore_ascii_case(mimetype) {
        return Some(mail);
    }
    mail.subparts.iter().find_map(|part| find_part(part, mimetype))
}
