use serenity::http::HttpError;
use thiserror::Error;

/// Discord-side failures surfaced through the platform-agnostic traits.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The bot lacks permission for the action (cannot DM, cannot manage roles).
    #[error("Missing permission: {0}")]
    PermissionDenied(String),

    /// The targeted member, role or channel does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(Box<serenity::Error>),
}

/// Classifies a Serenity error by the HTTP status Discord answered with.
///
/// 403 becomes `PermissionDenied` (this includes code 50007, "Cannot send
/// messages to this user"), 404 becomes `NotFound`, everything else is kept
/// as a boxed Discord error.
impl From<serenity::Error> for PlatformError {
    fn from(err: serenity::Error) -> Self {
        if let serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) = &err {
            match response.status_code.as_u16() {
                403 => return Self::PermissionDenied(response.error.message.clone()),
                404 => return Self::NotFound(response.error.message.clone()),
                _ => {}
            }
        }

        Self::Discord(Box::new(err))
    }
}
