use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use wordle_chat::cli::{Cli, CliInterface, LOCAL_CONVERSATION, parse_cli};
use wordle_chat::logging::{self, LogTarget};
use wordle_chat::tui::TuiInterface;
use wordle_chat::{AppError, ConversationId, GameBot, Settings, WordSource, chat_loop};

fn main() -> ExitCode {
    // A missing .env is fine; settings fall back to flags and defaults
    dotenvy::dotenv().ok();
    let cli = parse_cli();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("wordle-chat: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let log_target = if cli.tui {
        logging::tui_log_path().map(LogTarget::File)
    } else {
        Some(LogTarget::Stderr)
    };
    if let Some(target) = &log_target {
        logging::init(cli.verbose, target)?;
    }

    let settings = Settings::from_cli(cli)?;
    let words = Arc::new(WordSource::new(settings.word_origin().clone()));
    let count = words.load()?.len();
    log::info!("Word dict loaded: {count} words");

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut bot = GameBot::new(&settings, words, rng);
    log::info!("Bot ready, {} tries per round", settings.max_tries());

    if cli.tui {
        let mut interface = TuiInterface::new(ConversationId::new(LOCAL_CONVERSATION))?;
        chat_loop(&mut bot, &mut interface);
        interface.cleanup()?;
    } else {
        println!("Loaded {count} words. Send /new_game to start, 'exit' to quit.");
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock(), io::stdout());
        chat_loop(&mut bot, &mut interface);
    }
    Ok(())
}
