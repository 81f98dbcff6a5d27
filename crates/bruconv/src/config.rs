use std::path::PathBuf;

/// Resolved command options, built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Insomnia v5 YAML export to read
    pub input: PathBuf,
    /// Root directory of the generated Bruno collection
    pub output_dir: PathBuf,
    /// Name written to `bruno.json`
    pub collection_name: String,
    pub verbose: bool,
}

impl From<crate::App> for Config {
    fn from(app: crate::App) -> Self {
        Self {
            input: app.file,
            output_dir: app.output,
            collection_name: app.name,
            verbose: app.verbose,
        }
    }
}

impl Config {
    /// Option name, value and description, in the order they are printed
    pub fn describe(&self) -> Vec<(&'static str, String, &'static str)> {
        vec![
            ("f", self.input.display().to_string(), "Path to Insomnia exported file"),
            ("o", self.output_dir.display().to_string(), "Output directory"),
            ("n", self.collection_name.clone(), "Name of bruno collection"),
            ("verbose", self.verbose.to_string(), "Whether to display additional information"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_from_short_flags() {
        let app = crate::App::try_parse_from([
            "bruconv",
            "-f",
            "export.yaml",
            "-o",
            "out",
            "-n",
            "My API",
        ])
        .unwrap();
        let config = Config::from(app);

        assert_eq!(config.input, PathBuf::from("export.yaml"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.collection_name, "My API");
        assert!(!config.verbose);
    }

    #[test]
    fn test_describe_lists_every_option() {
        let config = Config {
            input: PathBuf::from("export.yaml"),
            output_dir: PathBuf::from("out"),
            collection_name: "My API".to_string(),
            verbose: true,
        };
        let names: Vec<&str> = config.describe().iter().map(|(name, _, _)| *name).collect();
        assert_eq!(names, vec!["f", "o", "n", "verbose"]);
    }
}
