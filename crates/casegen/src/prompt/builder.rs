//! Fragment-based prompt builder.
//!
//! [`PromptBuilder`] concatenates literal template fragments in call order.
//! It adds no separators or headings: every fragment
//! carries its own leading/trailing newlines, so the output is exactly the
//! fragments end to end. Only the final [`build`](PromptBuilder::build) trims.

/// Builder for prompts assembled from literal fragments.
///
/// # Example
///
/// ```
/// use casegen::prompt::PromptBuilder;
///
/// let prompt = PromptBuilder::new("Header:")
///     .fragment("\n- always")
///     .fragment_if(true, || "\n- when on".into())
///     .fragment_if(false, || "\n- when off".into())
///     .fragment_opt(None::<String>)
///     .build();
///
/// assert_eq!(prompt, "Header:\n- always\n- when on");
/// ```
#[derive(Debug, Default)]
pub struct PromptBuilder {
    buf: String,
}

impl PromptBuilder {
    /// Start a prompt with its unconditional header fragment.
    pub fn new(header: impl AsRef<str>) -> Self {
        Self {
            buf: header.as_ref().to_string(),
        }
    }

    /// Append a fragment verbatim.
    pub fn fragment(mut self, text: impl AsRef<str>) -> Self {
        self.buf.push_str(text.as_ref());
        self
    }

    /// Append a fragment only when `condition` holds.
    ///
    /// The `content_fn` is only called when `condition` is true.
    pub fn fragment_if(self, condition: bool, content_fn: impl FnOnce() -> String) -> Self {
        if condition {
            self.fragment(content_fn())
        } else {
            self
        }
    }

    /// Append a fragment only if the content is `Some`.
    pub fn fragment_opt(self, content: Option<impl AsRef<str>>) -> Self {
        match content {
            Some(c) => self.fragment(c),
            None => self,
        }
    }

    /// Finish, trimming leading and trailing whitespace.
    pub fn build(self) -> String {
        self.buf.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only() {
        assert_eq!(PromptBuilder::new("Header").build(), "Header");
    }

    #[test]
    fn fragments_are_joined_without_separator() {
        let prompt = PromptBuilder::new("a").fragment("b").fragment("\nc").build();
        assert_eq!(prompt, "ab\nc");
    }

    #[test]
    fn build_trims_both_ends() {
        let prompt = PromptBuilder::new("\n  body").fragment("\n\n").build();
        assert_eq!(prompt, "body");
    }

    #[test]
    fn build_keeps_inner_whitespace() {
        let prompt = PromptBuilder::new("x").fragment("\n\n  y  \n").build();
        assert_eq!(prompt, "x\n\n  y");
    }

    #[test]
    fn fragment_if_false_does_not_call_content_fn() {
        let prompt = PromptBuilder::new("P")
            .fragment_if(false, || unreachable!("content built for a false condition"))
            .build();
        assert_eq!(prompt, "P");
    }

    #[test]
    fn fragment_opt_some_and_none() {
        let prompt = PromptBuilder::new("P")
            .fragment_opt(Some("-yes"))
            .fragment_opt(None::<&str>)
            .build();
        assert_eq!(prompt, "P-yes");
    }
}
