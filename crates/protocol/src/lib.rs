mod error;
mod request;
mod response;
mod service;
mod version;

pub use error::{ErrorBody, FieldError, Rejection, RejectionDetails};
pub use request::{is_stored_hex, ThemeRequest};
pub use response::{
    Accessibility, ApiResponse, CurrentTheme, PreviewContrast, Readiness, Recommendations,
    SavedContrast, ThemePreview, ThemeSaved,
};
pub use service::ThemeService;
pub use version::API_VERSION;
