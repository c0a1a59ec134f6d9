use alert_toast::App;
use alert_toast::config::{self, ConfigResult, PlacementSetting};
use clap::{Parser, ValueEnum};
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::DefaultTerminal;
use std::io::stdout;

/// Where the toast is drawn
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlacementArg {
    Centered,
    TopBanner,
    BottomBanner,
}

impl From<PlacementArg> for PlacementSetting {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::Centered => PlacementSetting::Centered,
            PlacementArg::TopBanner => PlacementSetting::TopBanner,
            PlacementArg::BottomBanner => PlacementSetting::BottomBanner,
        }
    }
}

/// Interactive toast playground
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive playground for transient toast alerts in the terminal"
)]
struct Args {
    /// Seconds before a toast dismisses itself (0 or less disables the timer)
    #[arg(long, value_name = "SECS", value_parser = config::parse_duration_secs, allow_negative_numbers = true)]
    duration: Option<f64>,

    /// Ignore taps on the toast
    #[arg(long)]
    no_tap_dismiss: bool,

    /// Initial toast placement
    #[arg(long, value_enum)]
    placement: Option<PlacementArg>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Writes to /tmp/alert-toast-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/alert-toast-debug.log")?;

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== ALERT-TOAST DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let mut config_result = config::load_config();
    apply_args(&mut config_result, &args);

    let terminal = init_terminal()?;
    let app = App::new(&config_result.config);
    let result = run(terminal, app, config_result.warning);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== ALERT-TOAST DEBUG SESSION ENDED ===");

    Ok(())
}

/// Command-line flags win over the config file
fn apply_args(config_result: &mut ConfigResult, args: &Args) {
    let toast = &mut config_result.config.toast;
    if let Some(duration) = args.duration {
        toast.duration = duration;
    }
    if args.no_tap_dismiss {
        toast.tap_to_dismiss = false;
    }
    if let Some(placement) = args.placement {
        toast.placement = placement.into();
    }
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, warning: Option<String>) -> Result<()> {
    if let Some(warning) = warning {
        app.show_warning(&warning);
    }

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        // Input first so a tap beats a timer expiring in the same pass
        app.handle_events()?;
        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
