use crate::core::input::TokenReader;
use crate::domain::model::{Comparison, Operand};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub struct NumberComparator<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> NumberComparator<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Prompts for two integers, writes the comparison result line and,
    /// when pausing is enabled, waits for an acknowledgment line.
    ///
    /// Fails with `InputFormatError` as soon as either value does not parse;
    /// nothing else is written to `output` after that.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> Result<Comparison> {
        let mut reader = TokenReader::new(input);

        write!(output, "{}", self.config.first_prompt())?;
        output.flush()?;
        let first = reader.next_integer(Operand::First)?;
        tracing::debug!("Read first number: {}", first);

        write!(output, "{}", self.config.second_prompt())?;
        output.flush()?;
        let second = reader.next_integer(Operand::Second)?;
        tracing::debug!("Read second number: {}", second);

        let comparison = Comparison::of(first, second);
        writeln!(output, "{}", comparison)?;
        tracing::info!("🔍 Comparison result: {:?}", comparison);

        if self.config.pause_enabled() {
            write!(output, "{}", self.config.pause_prompt())?;
            output.flush()?;
            // 先吃掉數字後殘留的換行，再等使用者確認
            reader.discard_line();
            reader.wait_for_line()?;
            tracing::debug!("Acknowledgment received");
        }

        Ok(comparison)
    }
}
