/// Where the front door writes.
///
/// Standard output is reserved for the single value the shell consumes; everything else goes to the error stream.
pub trait UserInterface {
    /// Emit the value for the shell to consume.
    fn print(&self, message: String);
    /// Emit a diagnostic line.
    fn print_error(&self, message: String);
}

/// Writes to the process's standard output/error.
#[derive(Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }
}

#[cfg(any(test, feature = "unit_test"))]
pub mod util {
    //! In memory user interface, for asserting on the front door output.
    use super::UserInterface;
    use std::cell::RefCell;
    use std::sync::mpsc;

    /// Collects everything printed, in order, per stream.
    #[derive(Default)]
    pub struct InMemoryInterface {
        message: RefCell<Vec<String>>,
        error: RefCell<Vec<String>>,
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            self.message.borrow_mut().push(message);
        }

        fn print_error(&self, message: String) {
            self.error.borrow_mut().push(message);
        }
    }

    fn join(lines: Vec<String>) -> Option<String> {
        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }

    impl InMemoryInterface {
        /// The (output, error) streams, each joined by newlines.
        pub fn consume(self) -> (Option<String>, Option<String>) {
            let InMemoryInterface { message, error } = self;
            (join(message.into_inner()), join(error.into_inner()))
        }

        /// The output stream, asserting nothing went to the error stream.
        pub fn consume_message(self) -> String {
            let (message, error) = self.consume();
            assert_eq!(error, None);
            message.expect("nothing was printed")
        }

        /// The error stream, asserting nothing went to the output stream.
        pub fn consume_error(self) -> String {
            let (message, error) = self.consume();
            assert_eq!(message, None);
            error.expect("no error was printed")
        }
    }

    /// A connected pair: hand the sender to a [`crate::DotnetDev`], read the streams back from the receiver.
    pub fn channel_interface() -> (SenderInterface, ReceiverInterface) {
        let (message_tx, message_rx) = mpsc::channel();
        let (error_tx, error_rx) = mpsc::channel();
        let sender = SenderInterface {
            message_tx,
            error_tx,
        };
        let receiver = ReceiverInterface {
            message_rx,
            error_rx,
        };
        (sender, receiver)
    }

    /// The sending half of [`channel_interface`].
    pub struct SenderInterface {
        message_tx: mpsc::Sender<Option<String>>,
        error_tx: mpsc::Sender<Option<String>>,
    }

    impl Drop for SenderInterface {
        fn drop(&mut self) {
            // The receiver may already be gone.
            let _ = self.message_tx.send(None);
            let _ = self.error_tx.send(None);
        }
    }

    impl UserInterface for SenderInterface {
        fn print(&self, message: String) {
            self.message_tx.send(Some(message)).unwrap();
        }

        fn print_error(&self, message: String) {
            self.error_tx.send(Some(message)).unwrap();
        }
    }

    /// The receiving half of [`channel_interface`].
    pub struct ReceiverInterface {
        message_rx: mpsc::Receiver<Option<String>>,
        error_rx: mpsc::Receiver<Option<String>>,
    }

    impl ReceiverInterface {
        /// The (output, error) streams, each joined by newlines.
        /// Blocks until the sender is dropped.
        pub fn consume(self) -> (Option<String>, Option<String>) {
            let ReceiverInterface {
                message_rx,
                error_rx,
            } = self;
            (drain(message_rx), drain(error_rx))
        }

        /// The output stream, asserting nothing went to the error stream.
        pub fn consume_message(self) -> String {
            let (message, error) = self.consume();
            assert_eq!(error, None);
            message.expect("nothing was printed")
        }

        /// The error stream, asserting nothing went to the output stream.
        pub fn consume_error(self) -> String {
            let (message, error) = self.consume();
            assert_eq!(message, None);
            error.expect("no error was printed")
        }
    }

    fn drain(receiver: mpsc::Receiver<Option<String>>) -> Option<String> {
        let mut values = Vec::default();

        while let Ok(Some(message)) = receiver.recv() {
            values.push(message);
        }

        join(values)
    }

}
