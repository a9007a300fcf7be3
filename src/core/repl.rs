use crate::config::toml_config::AssistantConfig;
use crate::core::dispatcher::{Dispatcher, Reply};
use std::borrow::Cow;
use std::io::{self, BufRead, Write};

/// Reads commands line by line until `close`/`exit` or end of input.
pub fn run(
    dispatcher: &mut Dispatcher<'_>,
    config: &AssistantConfig,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    writeln!(output, "{}", config.greeting())?;
    let mut buffer = Vec::new();

    loop {
        write!(output, "{}", config.prompt())?;
        output.flush()?;

        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            tracing::debug!("Input closed");
            writeln!(output)?;
            break;
        }

        // 非 UTF-8 的位元組以替代字元處理，不中斷對話
        let line = String::from_utf8_lossy(&buffer);
        if let Cow::Owned(_) = line {
            tracing::debug!("Replaced invalid UTF-8 in input line");
        }

        match dispatcher.handle_line(&line) {
            Some(Reply::Continue(text)) => writeln!(output, "{}", text)?,
            Some(Reply::Exit) => {
                writeln!(output, "{}", config.farewell())?;
                break;
            }
            None => {}
        }
    }

    Ok(())
}
