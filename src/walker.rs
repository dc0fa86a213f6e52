use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::format::{format_converted_line, format_source_line};
use crate::translit::convert;

/// Errors from walking and rewriting source files. The engine itself never
/// fails; everything here is filesystem trouble.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("source {} does not exist", .0.display())]
    Missing(PathBuf),
}

/// Mirrored output location: a `converted/` directory next to the source,
/// same file name.
pub fn target_file(source: &Path) -> PathBuf {
    let parent = source.parent().unwrap_or_else(|| Path::new(""));
    parent
        .join("converted")
        .join(source.file_name().unwrap_or_default())
}

/// Convert a single file, or every regular file directly inside a
/// directory, into its mirrored target.
pub fn convert_path(source: &Path) -> Result<(), WalkError> {
    if !source.exists() {
        error!(source = %source.display(), "source does not exist");
        return Err(WalkError::Missing(source.to_path_buf()));
    }
    if source.is_file() {
        return convert_file(source, &target_file(source));
    }

    info!(source = %source.display(), "converting directory");
    for entry in fs::read_dir(source)? {
        let path = entry?.path();
        if path.is_file() {
            convert_file(&path, &target_file(&path))?;
        }
    }
    info!(source = %source.display(), "finished converting directory");
    Ok(())
}

/// Line-by-line rewrite: every source line is emitted with markup, and each
/// non-blank line is followed by its romanization. Line order is preserved;
/// CRLF endings match the songbook format the output feeds.
pub fn convert_file(source: &Path, target: &Path) -> Result<(), WalkError> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    info!(source = %source.display(), target = %target.display(), "converting file");

    let reader = BufReader::new(File::open(source)?);
    let mut writer = BufWriter::new(File::create(target)?);
    for line in reader.lines() {
        let line = line?;
        write!(writer, "{}\r\n", format_source_line(&line))?;
        if !line.trim().is_empty() {
            write!(writer, "{}\r\n", format_converted_line(&convert(&line)))?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_file() {
        assert_eq!(
            target_file(Path::new("songs/urugaayoa.txt")),
            Path::new("songs/converted/urugaayoa.txt")
        );
        assert_eq!(
            target_file(Path::new("urugaayoa.txt")),
            Path::new("converted/urugaayoa.txt")
        );
    }

    #[test]
    fn test_missing_source() {
        let missing = Path::new("no-such-file-anywhere.txt");
        assert!(matches!(
            convert_path(missing),
            Err(WalkError::Missing(_))
        ));
    }

    #[test]
    fn test_convert_file_round_trip() {
        let dir = std::env::temp_dir().join("tamil_roman_test_walker");
        fs::create_dir_all(&dir).unwrap();
        let source = dir.join("source.txt");
        let target = dir.join("converted").join("source.txt");

        fs::write(&source, "1. அப்பா\n\nஒன்று\n").unwrap();
        convert_file(&source, &target).unwrap();

        let result = fs::read_to_string(&target).unwrap();
        let expected = "---[Verse:1]---\r\n{y}1. அப்பா{/y}\r\nAppaa\r\n\
                        \r\n\
                        {y}ஒன்று{/y}\r\nOnru\r\n";
        assert_eq!(result, expected);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_convert_path_directory() {
        let dir = std::env::temp_dir().join("tamil_roman_test_walker_dir");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("a.txt"), "அம்மா\n").unwrap();
        fs::write(dir.join("b.txt"), "பயம்\n").unwrap();

        convert_path(&dir).unwrap();

        let a = fs::read_to_string(dir.join("converted").join("a.txt")).unwrap();
        assert_eq!(a, "{y}அம்மா{/y}\r\nAmmaa\r\n");
        let b = fs::read_to_string(dir.join("converted").join("b.txt")).unwrap();
        assert_eq!(b, "{y}பயம்{/y}\r\nPayam\r\n");

        fs::remove_dir_all(&dir).unwrap();
    }
}
