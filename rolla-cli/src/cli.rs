use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
use clap::error::ErrorKind;
use clap::CommandFactory;
pub use clap::Parser;
use rolla_lib::dice;
use rolla_lib::roll::Mode;

const ROLLA_AUTHOR: &str = crate_authors!();
const ROLLA_VERSION: &str = crate_version!();
const ROLLA_ABOUT: &str = crate_description!();
const ROLLA_EXPRESSION_HELP: &str = "Dice expression, NdS[k#][+M|-M]";
const ROLLA_FLAG_A_SHORT: char = 'a';
const ROLLA_FLAG_A_HELP: &str = "Roll twice and keep the higher total";
const ROLLA_FLAG_D_SHORT: char = 'd';
const ROLLA_FLAG_D_HELP: &str = "Roll twice and keep the lower total";
const ROLLA_SEED_ENV: &str = "ROLLA_SEED";
const ROLLA_SEED_HELP: &str = "Seed for reproducible rolls";
const ROLLA_MAX_COUNT_HELP: &str = "Maximum number of dice";
const ROLLA_MAX_SIDES_HELP: &str = "Maximum number of die sides";
const ROLLA_FLAG_V_SHORT: char = 'v';
const ROLLA_FLAG_V_HELP: &str = "Enable Debug logging";
const ROLLA_CONFLICT: &str = "Cannot use advantage and disadvantage together";

#[derive(Parser, Debug)]
#[command(author = ROLLA_AUTHOR, version = ROLLA_VERSION, about = ROLLA_ABOUT)]
pub struct Args {
    #[arg(help = ROLLA_EXPRESSION_HELP)]
    pub expression: String,
    #[arg(short = ROLLA_FLAG_A_SHORT, long, help = ROLLA_FLAG_A_HELP, action)]
    pub advantage: bool,
    #[arg(short = ROLLA_FLAG_D_SHORT, long, help = ROLLA_FLAG_D_HELP, action)]
    pub disadvantage: bool,
    #[arg(long, env = ROLLA_SEED_ENV, help = ROLLA_SEED_HELP)]
    pub seed: Option<u64>,
    #[arg(
        long,
        default_value_t = dice::MAX_COUNT as u64,
        value_parser = clap::value_parser!(u64).range(1..=dice::COUNT_CEILING as u64),
        help = ROLLA_MAX_COUNT_HELP
    )]
    pub max_count: u64,
    #[arg(
        long,
        default_value_t = dice::MAX_SIDES,
        value_parser = clap::value_parser!(u64).range(2..=dice::SIDES_CEILING),
        help = ROLLA_MAX_SIDES_HELP
    )]
    pub max_sides: u64,
    #[arg(short = ROLLA_FLAG_V_SHORT, long, help = ROLLA_FLAG_V_HELP, action)]
    pub verbose: bool,
}

impl Args {
    /// Evaluation mode, a usage error when both flags are set
    pub fn mode(&self) -> Result<Mode, clap::Error> {
        match (self.advantage, self.disadvantage) {
            (true, true) => Err(Args::command().error(ErrorKind::ArgumentConflict, ROLLA_CONFLICT)),
            (true, false) => Ok(Mode::Advantage),
            (false, true) => Ok(Mode::Disadvantage),
            (false, false) => Ok(Mode::Normal),
        }
    }

    pub fn limits(&self) -> dice::Limits {
        dice::Limits {
            max_count: usize::try_from(self.max_count).unwrap_or(dice::COUNT_CEILING),
            max_sides: self.max_sides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("rolla").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn mode_test() {
        assert_eq!(Mode::Normal, args(&["1d20"]).mode().unwrap());
        assert_eq!(Mode::Advantage, args(&["-a", "1d20+2"]).mode().unwrap());
        assert_eq!(Mode::Disadvantage, args(&["--disadvantage", "2d10"]).mode().unwrap());
    }

    #[test]
    fn conflict_test() {
        let error = args(&["-a", "-d", "1d20"]).mode().unwrap_err();
        assert_eq!(ErrorKind::ArgumentConflict, error.kind());
        assert_eq!(2, error.exit_code());
        assert!(error.to_string().contains(ROLLA_CONFLICT));
    }

    #[test]
    fn seed_and_limits_test() {
        let a = args(&["--seed", "7", "--max-count", "300", "300d6"]);
        assert_eq!(Some(7), a.seed);
        assert_eq!(300, a.limits().max_count);
        assert_eq!(dice::MAX_SIDES, a.limits().max_sides);
    }

    #[test]
    fn seed_from_env_test() {
        // the only test touching the variable, every other one passes `--seed` or ignores it
        std::env::set_var(ROLLA_SEED_ENV, "42");
        let from_env = args(&["2d10"]).seed;
        let from_flag = args(&["--seed", "7", "2d10"]).seed;
        std::env::remove_var(ROLLA_SEED_ENV);
        let unset = args(&["2d10"]).seed;

        assert_eq!(Some(42), from_env);
        assert_eq!(Some(7), from_flag);
        assert_eq!(None, unset);
    }

    #[test]
    fn seed_env_is_declared_test() {
        let command = Args::command();
        let seed = command
            .get_arguments()
            .find(|arg| arg.get_id() == "seed")
            .unwrap();
        assert_eq!(Some(std::ffi::OsStr::new(ROLLA_SEED_ENV)), seed.get_env());
    }

    #[test]
    fn limit_ceiling_test() {
        let a = args(&[
            "--max-count",
            "10000",
            "--max-sides",
            "1000000000",
            "10000d1000000000",
        ]);
        assert_eq!(dice::COUNT_CEILING, a.limits().max_count);
        assert_eq!(dice::SIDES_CEILING, a.limits().max_sides);

        for argv in [
            ["--max-count", "10001", "1d6"],
            ["--max-count", "0", "1d6"],
            ["--max-sides", "1000000001", "1d6"],
            ["--max-sides", "18446744073709551615", "1d6"],
            ["--max-sides", "1", "1d6"],
        ] {
            let error =
                Args::try_parse_from(std::iter::once("rolla").chain(argv)).unwrap_err();
            assert_eq!(ErrorKind::ValueValidation, error.kind(), "{:?}", argv);
        }
    }

    #[test]
    fn bad_seed_test() {
        let error = Args::try_parse_from(["rolla", "--seed", "abc", "1d6"]).unwrap_err();
        assert_eq!(ErrorKind::ValueValidation, error.kind());
    }
}
