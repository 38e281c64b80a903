// Message bodies for the two emails sent per accepted submission.
// User-supplied text is escaped with `ammonia::clean_text` in the HTML
// variants; the plain-text variants carry it verbatim.

use ammonia::clean_text;

use crate::contact::validation::ContactSubmission;
use crate::mailer::OutboundEmail;

pub const OWNER_NAME: &str = "Priyanshu Rana";
pub const OWNER_TITLE: &str = "Database Developer & Software Engineer";
pub const OWNER_EMAIL: &str = "priyanshurana2228@gmail.com";
pub const OWNER_LINKEDIN: &str = "linkedin.com/in/priyanshu-rana-230a152a4";
pub const OWNER_GITHUB: &str = "github.com/Priyanshu2209";

const ACCENT: &str = "#14b8a6";

/// Notification to the site owner carrying the full submission.
pub fn notification_email(from: &str, submission: &ContactSubmission) -> OutboundEmail {
    let name = clean_text(&submission.name);
    let email = clean_text(&submission.email);
    let message = clean_text(&submission.message);

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: {ACCENT};">New Contact Form Submission</h2>
  <div style="background-color: #f3f4f6; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Message:</strong></p>
    <p style="background-color: white; padding: 15px; border-radius: 4px; white-space: pre-wrap;">{message}</p>
  </div>
  <p style="color: #6b7280; font-size: 12px;">This message was sent from your portfolio website contact form.</p>
</div>"#
    );

    let text = format!(
        "New Contact Form Submission\n\nName: {}\nEmail: {}\n\nMessage:\n{}\n",
        submission.name, submission.email, submission.message
    );

    OutboundEmail {
        from: from.to_string(),
        to: OWNER_EMAIL.to_string(),
        subject: format!("Portfolio Contact: Message from {}", submission.name),
        html,
        text,
    }
}

/// Acknowledgment back to the submitter, echoing their message.
pub fn acknowledgment_email(from: &str, submission: &ContactSubmission) -> OutboundEmail {
    let name = clean_text(&submission.name);
    let message = clean_text(&submission.message);

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: {ACCENT};">Thank you for contacting me!</h2>
  <p>Hi {name},</p>
  <p>I've received your message and will get back to you as soon as possible.</p>
  <div style="background-color: #f3f4f6; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <p><strong>Your message:</strong></p>
    <p style="background-color: white; padding: 15px; border-radius: 4px; white-space: pre-wrap;">{message}</p>
  </div>
  <p>Best regards,<br><strong>{OWNER_NAME}</strong></p>
  <p style="color: #6b7280; font-size: 12px;">{title}</p>
  <div style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #e5e7eb;">
    <p style="color: #6b7280; font-size: 12px;">
      Email: {OWNER_EMAIL}<br>
      LinkedIn: <a href="https://{OWNER_LINKEDIN}" style="color: {ACCENT};">{OWNER_LINKEDIN}</a><br>
      GitHub: <a href="https://{OWNER_GITHUB}" style="color: {ACCENT};">{OWNER_GITHUB}</a>
    </p>
  </div>
</div>"#,
        title = OWNER_TITLE.replace('&', "&amp;"),
    );

    let text = format!(
        "Thank you for contacting me!\n\n\
         Hi {},\n\n\
         I've received your message and will get back to you as soon as possible.\n\n\
         Your message:\n{}\n\n\
         Best regards,\n{OWNER_NAME}\n{OWNER_TITLE}\n\n\
         Email: {OWNER_EMAIL}\n\
         LinkedIn: {OWNER_LINKEDIN}\n\
         GitHub: {OWNER_GITHUB}\n",
        submission.name, submission.message
    );

    OutboundEmail {
        from: from.to_string(),
        to: submission.email.clone(),
        subject: format!("Thanks for reaching out! - {OWNER_NAME}"),
        html,
        text,
    }
}
