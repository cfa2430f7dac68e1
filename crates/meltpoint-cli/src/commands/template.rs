use crate::cli::TemplateArgs;
use crate::error::{CliError, Result};
use crate::io;
use tracing::info;

pub fn run(args: TemplateArgs) -> Result<()> {
    match &args.output {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            io::write_template(file, io::delimiter_for(path)).map_err(|e| {
                CliError::FileWriting {
                    path: path.clone(),
                    source: e.into(),
                }
            })?;
            info!("Wrote batch template to {:?}", path);
            eprintln!("Template written to: {}", path.display());
        }
        None => {
            io::write_template(std::io::stdout().lock(), b'\t')
                .map_err(|e| CliError::Other(e.into()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn template_file_uses_extension_delimiter() {
        let dir = tempdir().unwrap();
        let tsv = dir.path().join("primers.tsv");
        let csv = dir.path().join("primers.csv");

        run(TemplateArgs {
            output: Some(tsv.clone()),
        })
        .unwrap();
        run(TemplateArgs {
            output: Some(csv.clone()),
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&tsv).unwrap(), "Name\tSequence\tNotes\n");
        assert_eq!(fs::read_to_string(&csv).unwrap(), "Name,Sequence,Notes\n");
    }

    #[test]
    fn written_template_reads_back_as_an_empty_batch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("primers.tsv");
        run(TemplateArgs {
            output: Some(path.clone()),
        })
        .unwrap();

        let sheet = io::read_primers(&path, &Default::default()).unwrap();
        assert!(sheet.is_empty());
    }
}
