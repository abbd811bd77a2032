//! TypeScript emission.
//!
//! Output is committed to the repository and compared byte for byte, so the
//! layout here is fixed: a leading empty line, the declaration, a trailing
//! newline.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{EmitError, EmitResult};

/// Identifier of the generated decision table.
pub const COLOR_DECISION_AND_CORRESPONDING_OPTIONS: &str = "colorDecisionAndCorrespondingOptions";

/// Configuration for emitted TypeScript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Name of the exported constant.
    pub const_name: String,
    /// Spaces per indentation level; 0 emits compact JSON.
    pub indent: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            const_name: COLOR_DECISION_AND_CORRESPONDING_OPTIONS.to_string(),
            indent: 4,
        }
    }
}

impl EmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_const_name(mut self, name: impl Into<String>) -> Self {
        self.const_name = name.into();
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Render `value` as `export const {name}= {json} as const;` between a
/// leading empty line and a trailing newline.
pub fn render_ts_const<T: Serialize + ?Sized>(value: &T, options: &EmitOptions) -> EmitResult<String> {
    let json = to_json(value, options)?;
    Ok(format!(
        "\nexport const {}= {} as const;\n",
        options.const_name, json
    ))
}

fn to_json<T: Serialize + ?Sized>(value: &T, options: &EmitOptions) -> EmitResult<String> {
    let serialize_error = |source| EmitError::Serialize {
        name: options.const_name.clone(),
        source,
    };

    if options.indent == 0 {
        return serde_json::to_string(value).map_err(serialize_error);
    }

    let indent = " ".repeat(options.indent);
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer).map_err(serialize_error)?;
    Ok(String::from_utf8(buf).expect("serde_json only writes UTF-8"))
}
