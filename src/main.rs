use controlled_context::pipeline::{detect_terminal_size, mount, run};
use controlled_context::{init_file_logger, HomePage, LOG_FILE};
use simplelog::LevelFilter;

fn main() -> controlled_context::Result<()> {
    // Stdout belongs to the terminal UI; log to a file instead. Failures are
    // reported now because the alternate screen hides stderr later.
    if let Err(err) = init_file_logger(LOG_FILE, LevelFilter::Debug) {
        eprintln!("logging disabled ({}): {}", LOG_FILE, err);
    }

    log::info!("starting home page");

    detect_terminal_size();

    let page = HomePage::new();
    let handle = mount(move || page.render())?;
    let result = run(&handle);
    handle.unmount();

    result
}
