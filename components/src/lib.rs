//! DSFR Components
//!
//! Framework-independent pieces of the design system's components:
//! - Per-component localization tables with language fallback
//! - The file upload view model (ids, classes, texts per state)

pub mod i18n;
pub mod upload;

pub use i18n::{ComponentI18n, I18nError, MessageKey, DEFAULT_LANG};
pub use upload::{
    resolve, upload_i18n, IdSequence, InputView, LabelView, MessageView, UploadMessage, UploadProps,
    UploadState, UploadView,
};
