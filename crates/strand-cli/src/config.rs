use clap::Parser;
use strand::{Alphabet, BASE64_ALPHABET};

/// Command-line arguments for one comparison run.
#[derive(Debug, Parser)]
#[command(
    name = "strand-cli",
    about = "Compares random string generation strategies across lengths and call counts"
)]
pub struct CliArgs {
    /// Alphabet the generated strings draw their symbols from.
    #[arg(long, default_value = BASE64_ALPHABET)]
    pub alphabet: String,

    /// Number of calls timed per (strategy, length) cell.
    #[arg(long, default_value_t = 1_000_000)]
    pub calls: u64,

    /// String lengths to time, comma separated.
    #[arg(long, value_delimiter = ',', default_values_t = [10, 100, 1000])]
    pub lengths: Vec<usize>,

    /// Length of the sample printed for each strategy before timing.
    #[arg(long, default_value_t = 10)]
    pub sample_length: usize,
}

/// Validated run configuration.
///
/// Built from [`CliArgs`] so the alphabet is parsed and validated exactly
/// once, before any strategy runs.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub alphabet: Alphabet,
    pub calls: u64,
    pub lengths: Vec<usize>,
    pub sample_length: usize,
}

impl TryFrom<CliArgs> for RunConfig {
    type Error = strand::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let alphabet = Alphabet::new(&args.alphabet)?;
        Ok(Self {
            alphabet,
            calls: args.calls,
            lengths: args.lengths,
            sample_length: args.sample_length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_standard_run_matrix() {
        let args = CliArgs::parse_from(["strand-cli"]);
        let config = RunConfig::try_from(args).unwrap();

        assert_eq!(config.alphabet.len(), 64);
        assert_eq!(config.calls, 1_000_000);
        assert_eq!(config.lengths, [10, 100, 1000]);
        assert_eq!(config.sample_length, 10);
    }

    #[test]
    fn lengths_parse_from_a_comma_separated_list() {
        let args = CliArgs::parse_from(["strand-cli", "--lengths", "5,50"]);
        let config = RunConfig::try_from(args).unwrap();
        assert_eq!(config.lengths, [5, 50]);
    }

    #[test]
    fn an_empty_alphabet_is_rejected_at_startup() {
        let args = CliArgs::parse_from(["strand-cli", "--alphabet", ""]);
        assert_eq!(
            RunConfig::try_from(args).unwrap_err(),
            strand::Error::EmptyAlphabet
        );
    }
}
