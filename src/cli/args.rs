use clap::Parser;
use std::path::PathBuf;

/// Console loan-tracking system for a small library
#[derive(Parser, Debug)]
#[command(name = "biblioteca-engine")]
#[command(about = "Carga catálogos y préstamos desde archivos planos y genera reportes", long_about = None)]
pub struct CliArgs {
    /// Directory holding the default data files
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = "data",
        help = "Directory with usuarios.lfa, libros.lfa and prestamos.lfa"
    )]
    pub data_dir: PathBuf,

    /// Directory HTML reports are written into
    #[arg(
        long = "out-dir",
        value_name = "DIR",
        default_value = "output",
        help = "Directory where HTML reports are generated"
    )]
    pub out_dir: PathBuf,
}

/// Parse command-line arguments
///
/// Exits the process with a usage message on invalid arguments.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::defaults(&["program"], "data", "output")]
    #[case::custom_data_dir(&["program", "--data-dir", "/tmp/lfa"], "/tmp/lfa", "output")]
    #[case::custom_out_dir(&["program", "--out-dir", "/tmp/html"], "data", "/tmp/html")]
    #[case::both_custom(
        &["program", "--data-dir", "d", "--out-dir", "o"],
        "d",
        "o"
    )]
    fn test_directory_arguments(
        #[case] args: &[&str],
        #[case] expected_data: &str,
        #[case] expected_out: &str,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.data_dir, PathBuf::from(expected_data));
        assert_eq!(parsed.out_dir, PathBuf::from(expected_out));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(CliArgs::try_parse_from(["program", "--strategy", "sync"]).is_err());
    }
}
