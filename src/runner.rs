use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;
use crate::input::{discover, extract};
use crate::model::Record;
use crate::output::{render, LineWriter, DISK_ACCESSES_CHART_FILE, PHASES_CHART_FILE};

// data/results-*.txt -> [Record] -> sort by record count -> 2 x PNG
//
// discover == data dir  ->  Vec<PathBuf>
// extract  == PathBuf   ->  Result<Record>
// render   == [Record]  ->  phases_comparison.png, disk_accesses_comparison.png

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Outcome {
    NoData,
    Generated(Vec<PathBuf>),
}

pub struct Runner<W> {
    config: Config,
    writer: LineWriter<W>,
}

impl<W: Write> Runner<W> {
    pub fn new(config: Config, writer: LineWriter<W>) -> Self {
        Self { config, writer }
    }

    /// Any file that can't be read aborts the whole run before charts are drawn.
    pub fn run(&mut self) -> Result<Outcome> {
        let files = discover(&self.config.data_dir)?;

        if files.is_empty() {
            self.report(&format!(
                "No data files found in the '{}' directory.",
                self.config.data_dir.display()
            ))?;
            return Ok(Outcome::NoData);
        }

        let mut records = files
            .iter()
            .map(|path| extract(path))
            .collect::<Result<Vec<Record>>>()?;

        let written = render(&mut records, &self.config.output_dir)?;

        self.report(&format!(
            "Plots generated: '{}', '{}'",
            PHASES_CHART_FILE, DISK_ACCESSES_CHART_FILE
        ))?;

        Ok(Outcome::Generated(written))
    }

    pub fn into_writer(self) -> LineWriter<W> {
        self.writer
    }

    fn report(&mut self, line: &str) -> Result<()> {
        self.writer
            .write_line(line)
            .map_err(|e| ("writer failed with error", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn runner(root: &TempDir) -> Runner<Vec<u8>> {
        Runner::new(
            Config {
                data_dir: root.path().join("data"),
                output_dir: root.path().to_path_buf(),
            },
            LineWriter::new(Vec::new()),
        )
    }

    fn console(runner: Runner<Vec<u8>>) -> String {
        String::from_utf8(runner.into_writer().into_inner()).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_missing_data_dir() {
        let root = TempDir::new().unwrap();
        let mut runner = runner(&root);

        assert_eq!(runner.run().unwrap(), Outcome::NoData);
        assert_eq!(
            console(runner),
            format!(
                "No data files found in the '{}' directory.\n",
                root.path().join("data").display()
            )
        );
        assert!(!root.path().join(PHASES_CHART_FILE).exists());
        assert!(!root.path().join(DISK_ACCESSES_CHART_FILE).exists());
    }

    #[test]
    fn test_no_matching_files() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("data")).unwrap();
        fs::write(root.path().join("data/notes.txt"), "Phases Needed Actual: 1").unwrap();

        let mut runner = runner(&root);
        assert_eq!(runner.run().unwrap(), Outcome::NoData);
        assert!(console(runner).starts_with("No data files found"));
        assert!(!root.path().join(PHASES_CHART_FILE).exists());
    }

    #[test]
    fn test_unreadable_file_aborts_run() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("data")).unwrap();
        fs::write(
            root.path().join("data/results-100-a.txt"),
            "Phases Needed Actual: 5\n",
        )
        .unwrap();
        fs::write(root.path().join("data/results-1000-b.txt"), b"\xff\xfe").unwrap();

        let mut runner = runner(&root);
        let err = runner.run().unwrap_err();

        assert!(err.message().starts_with("couldn't decode UTF-8"));
        assert_eq!(console(runner), "");
        assert!(!root.path().join(PHASES_CHART_FILE).exists());
        assert!(!root.path().join(DISK_ACCESSES_CHART_FILE).exists());
    }

    #[test]
    fn test_generates_and_overwrites_charts() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("data")).unwrap();
        fs::write(
            root.path().join("data/results-100-a.txt"),
            "Phases Needed Actual: 5\nPhases Needed Theory: 4\n\
             Disk accesses in practice: 200\nDisk accesses in theory:150\n",
        )
        .unwrap();
        fs::write(
            root.path().join("data/results-1000-b.txt"),
            "Phases Needed Actual: 8\nPhases Needed Theory: 7\n\
             Disk accesses in practice: 900\nDisk accesses in theory:850\n",
        )
        .unwrap();

        for _ in 0..2 {
            let mut runner = runner(&root);
            let outcome = runner.run().unwrap();

            assert_eq!(
                outcome,
                Outcome::Generated(vec![
                    root.path().join(PHASES_CHART_FILE),
                    root.path().join(DISK_ACCESSES_CHART_FILE),
                ])
            );
            assert_eq!(
                console(runner),
                "Plots generated: 'phases_comparison.png', 'disk_accesses_comparison.png'\n"
            );
            assert!(root.path().join(PHASES_CHART_FILE).exists());
            assert!(root.path().join(DISK_ACCESSES_CHART_FILE).exists());
        }
    }
}
