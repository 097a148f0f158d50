/// Destination for the plugin's log lines.
pub trait LogSink {
    fn log(&self, message: &str);

    fn error(&self, message: &str);
}

/// Forwards log lines to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Sends panic messages to `tracing` instead of stderr.
///
/// The registry catches observer and callback panics and logs them through
/// the sink, but the default hook would still print them to stderr first.
pub fn route_panics_to_tracing() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("{info}");
    }));
}

#[cfg(test)]
pub(crate) use memory::MemorySink;


#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn observer_panic() {
        panic!("observer blew up");
    }

    #[test]
    fn panics_are_written_to_tracing() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            route_panics_to_tracing();
            let caught = std::panic::catch_unwind(observer_panic);
            let _ = std::panic::take_hook();
            assert!(caught.is_err());
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("ERROR"), "{output}");
        assert!(output.contains("observer blew up"), "{output}");
    }
}
