//! File upload view model.
//!
//! Resolves upload props into everything markup needs: ids, class names,
//! label and hint texts, and the state message. Rendering is left to the
//! caller.

use crate::i18n::{ComponentI18n, I18nError, MessageKey};

/// Validation state of the upload group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Default,
    Success,
    Error,
}

impl UploadState {
    /// Modifier class of the group, if any.
    pub fn group_class(self) -> Option<&'static str> {
        match self {
            UploadState::Default => None,
            UploadState::Success => Some("fr-input-group--valid"),
            UploadState::Error => Some("fr-input-group--error"),
        }
    }

    /// Class of the state message; `Default` shows no message.
    pub fn message_class(self) -> Option<&'static str> {
        match self {
            UploadState::Default => None,
            UploadState::Success => Some("fr-valid-text"),
            UploadState::Error => Some("fr-error-text"),
        }
    }
}

/// Upload messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadMessage {
    AddFile,
    AddFiles,
    Hint,
}

impl MessageKey for UploadMessage {
    const ALL: &'static [Self] = &[
        UploadMessage::AddFile,
        UploadMessage::AddFiles,
        UploadMessage::Hint,
    ];

    fn key(self) -> &'static str {
        match self {
            UploadMessage::AddFile => "add file",
            UploadMessage::AddFiles => "add files",
            UploadMessage::Hint => "hint",
        }
    }
}

/// Upload table with the built-in French and English messages.
pub fn upload_i18n() -> Result<ComponentI18n<UploadMessage>, I18nError> {
    let mut i18n = ComponentI18n::new(
        "Upload",
        [
            (UploadMessage::AddFile, "Ajouter un fichier"),
            (UploadMessage::AddFiles, "Ajouter des fichiers"),
            (
                UploadMessage::Hint,
                "Taille maximale : 500 Mo. Formats supportés : jpg, png, pdf. Plusieurs fichiers possibles.",
            ),
        ],
    )?;
    i18n.add_translations(
        "en",
        [
            (UploadMessage::AddFile, "Add file"),
            (UploadMessage::AddFiles, "Add files"),
            (
                UploadMessage::Hint,
                "Maximum size : 500 Mo. Supported formats : jpg, png, pdf. Many files possible.",
            ),
        ],
    );
    Ok(i18n)
}

/// Generates ids for components rendered without an explicit one.
#[derive(Debug, Default)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// `{prefix}-{n}`, counting from 1.
    pub fn next_id(&mut self, prefix: &str) -> String {
        self.next += 1;
        format!("{}-{}", prefix, self.next)
    }
}

/// Upload props. `None` texts take their localized defaults.
#[derive(Debug, Clone, Default)]
pub struct UploadProps {
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub disabled: bool,
    pub hint: Option<String>,
    pub multiple: bool,
    pub label: Option<String>,
    pub state: UploadState,
    /// Not shown when `state` is `Default`.
    pub state_related_message: Option<String>,
    /// Id of the `<input>`; defaults to `{id}-input`.
    pub input_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadView {
    pub id: String,
    pub class_name: String,
    pub label: Option<LabelView>,
    pub input: InputView,
    pub message: Option<MessageView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelView {
    pub class_name: &'static str,
    pub html_for: String,
    pub text: String,
    pub hint: String,
    pub hint_class_name: &'static str,
    pub aria_disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub id: String,
    pub name: String,
    pub class_name: &'static str,
    pub input_type: &'static str,
    pub multiple: bool,
    pub disabled: bool,
    pub aria_describedby: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub id: String,
    pub class_name: &'static str,
    pub text: Option<String>,
}

const ID_PREFIX: &str = "fr-upload";

/// Resolve `props` for `lang`.
pub fn resolve(
    props: &UploadProps,
    i18n: &ComponentI18n<UploadMessage>,
    lang: &str,
    ids: &mut IdSequence,
) -> UploadView {
    let id = match &props.id {
        Some(id) => id.clone(),
        None => ids.next_id(ID_PREFIX),
    };
    let input_id = props
        .input_id
        .clone()
        .unwrap_or_else(|| format!("{}-input", id));
    let message_id = format!("{}-desc-error", input_id);

    let label_text = props.label.clone().unwrap_or_else(|| {
        let key = if props.multiple {
            UploadMessage::AddFiles
        } else {
            UploadMessage::AddFile
        };
        i18n.t(lang, key).to_string()
    });
    let hint = props
        .hint
        .clone()
        .unwrap_or_else(|| i18n.t(lang, UploadMessage::Hint).to_string());

    let label = (!label_text.is_empty() || !hint.is_empty()).then(|| LabelView {
        class_name: "fr-label",
        html_for: input_id.clone(),
        text: label_text,
        hint,
        hint_class_name: "fr-hint-text",
        aria_disabled: props.disabled,
    });

    let class_name = cx([
        Some("fr-upload-group"),
        props.disabled.then_some("fr-input-group--disabled"),
        props.state.group_class(),
        props.class_name.as_deref(),
    ]);

    let message = props.state.message_class().map(|class_name| MessageView {
        id: message_id.clone(),
        class_name,
        text: props.state_related_message.clone(),
    });

    UploadView {
        id,
        class_name,
        label,
        input: InputView {
            name: input_id.clone(),
            id: input_id,
            class_name: "fr-upload",
            input_type: "file",
            multiple: props.multiple,
            disabled: props.disabled,
            aria_describedby: message_id,
        },
        message,
    }
}

/// Join the present, non-empty class names with spaces.
fn cx<'a>(classes: impl IntoIterator<Item = Option<&'a str>>) -> String {
    classes
        .into_iter()
        .flatten()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
