use std::{fs, io::Write, path::Path};

use anyhow::Context;
use prompt_wizard::Answers;

/// Write `answers` as a JSON object to `result_file`, or to `out` when no
/// file is given.
///
/// The file is created or truncated. On stdout the object is followed by a
/// newline.
pub fn write_answers(
    answers: &Answers,
    result_file: Option<&Path>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let json = answers.to_json().context("failed to encode answers")?;

    match result_file {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("failed to write results to {}", path.display()))?;
            log::info!("wrote {} answers to {}", answers.len(), path.display());
        }
        None => {
            writeln!(out, "{json}").context("failed to write results to stdout")?;
            out.flush().context("failed to flush stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_sorted_object_to_stream() {
        let answers: Answers = [("name", "Ada"), ("color", "Blue")].into_iter().collect();
        let mut out = Vec::new();
        write_answers(&answers, None, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"color\":\"Blue\",\"name\":\"Ada\"}\n"
        );
    }

    #[test]
    fn empty_answers_are_an_empty_object() {
        let mut out = Vec::new();
        write_answers(&Answers::new(), None, &mut out).unwrap();
        assert_eq!(out, b"{}\n");
    }
}
