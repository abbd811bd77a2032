//! Syntax tree for CSS stylesheets.

/// Source location for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

/// A parsed stylesheet: top-level rules in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    /// All style rules, depth-first in source order, including those nested
    /// in at-rules or other style rules.
    pub fn style_rules(&self) -> Vec<&StyleRule> {
        let mut out = Vec::new();
        let mut stack = vec![self.rules.iter()];
        while let Some(level) = stack.last_mut() {
            let Some(rule) = level.next() else {
                stack.pop();
                continue;
            };
            match rule {
                Rule::Style(style) => {
                    out.push(style);
                    stack.push(style.block.rules.iter());
                }
                Rule::At(at) => {
                    if let Some(block) = &at.block {
                        stack.push(block.rules.iter());
                    }
                }
            }
        }
        out
    }
}

/// A rule in a stylesheet or block.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Style(StyleRule),
    At(AtRule),
}

/// `selector, selector { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    /// Comma-separated selectors, whitespace-normalized.
    pub selectors: Vec<String>,
    pub block: Block,
    pub span: Span,
}

/// `@name prelude;` or `@name prelude { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct AtRule {
    /// Name without the leading `@`.
    pub name: String,
    pub prelude: String,
    pub block: Option<Block>,
    pub span: Span,
}

/// Contents of a `{ ... }` block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub declarations: Vec<Declaration>,
    pub rules: Vec<Rule>,
}

/// `name: value [!important];`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: String,
    /// Value text with comments removed and whitespace runs collapsed.
    pub value: String,
    pub important: bool,
    pub span: Span,
}

impl Declaration {
    /// True for `--*` custom properties.
    pub fn is_custom_property(&self) -> bool {
        self.name.starts_with("--")
    }
}
