//! Response framing.
//!
//! Every session response is printed between horizontal-rule banners with a
//! fixed indentation prefix. The frame is built from config and handed to the
//! loop explicitly; there is no global indentation constant.

/// Banner-and-indent framing for response blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    indent: String,
    banner_width: usize,
}

impl Frame {
    #[must_use]
    pub fn new(indent_width: usize, banner_width: usize) -> Self {
        Self {
            indent: " ".repeat(indent_width),
            banner_width,
        }
    }

    /// The horizontal rule that brackets each response block.
    #[must_use]
    pub fn banner(&self) -> String {
        format!("{}{}", self.indent, "_".repeat(self.banner_width))
    }

    /// Wrap a response body in banners, indenting every line.
    #[must_use]
    pub fn render(&self, body: &str) -> String {
        let mut block = self.banner();
        block.push('\n');
        for line in body.lines() {
            block.push_str(&self.indent);
            block.push_str(line);
            block.push('\n');
        }
        block.push_str(&self.banner());
        block.push('\n');
        block
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(4, 60)
    }
}
