//! Display sinks receive the text the calculator wants shown.

/// Receiver for display updates.
///
/// The calculator keeps its own authoritative copy of the display, so sinks
/// are write-only.
pub trait DisplaySink {
    fn set_display(&mut self, text: &str);
}

/// Keeps only the latest text.
impl DisplaySink for String {
    fn set_display(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Records every update in order.
impl DisplaySink for Vec<String> {
    fn set_display(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn set_display(&mut self, text: &str) {
        (**self).set_display(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_sink_replaces() {
        let mut sink = String::from("12");
        sink.set_display("3");
        assert_eq!(sink, "3");
    }

    fn show_all<S: DisplaySink>(mut sink: S, texts: &[&str]) {
        for text in texts {
            sink.set_display(text);
        }
    }

    #[test]
    fn test_borrowed_sink_forwards() {
        let mut log: Vec<String> = Vec::new();
        show_all(&mut log, &["0", "4"]);
        assert_eq!(log, vec!["0", "4"]);
    }
}
