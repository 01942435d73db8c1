use clap::Parser;
use connect_four_core::BoardConfig;
use wasm_bindgen::prelude::*;

mod game;
mod layout;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = BoardConfig::STANDARD_ROWS)]
    rows: u8,

    #[arg(long, default_value_t = BoardConfig::STANDARD_COLS)]
    cols: u8,
}

impl Args {
    /// Arguments come from the location hash, e.g. `#-vv&--seed=42`.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    fn board_config(&self) -> BoardConfig {
        BoardConfig::new(self.rows, self.cols).unwrap_or_else(|err| {
            log::warn!("{}, falling back to the standard board", err);
            BoardConfig::standard()
        })
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();
    let args = Args::from_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    let props = game::GameProps {
        config: args.board_config(),
        seed: args.seed,
    };
    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_hash("").unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.board_config(), BoardConfig::standard());
    }

    #[test]
    fn hash_arguments_are_split_on_ampersand() {
        let args = Args::from_hash("#-vv&--seed=42&--rows=5&--cols=8").unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
        assert_eq!(args.board_config().size(), (5, 8));
    }

    #[test]
    fn invalid_board_falls_back_to_standard() {
        let args = Args::from_hash("#--rows=2").unwrap();
        assert_eq!(args.board_config(), BoardConfig::standard());
    }

    #[test]
    fn malformed_seed_is_an_error() {
        assert!(Args::from_hash("#--seed=abc").is_err());
    }
}
