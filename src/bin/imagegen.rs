use std::path::PathBuf;
use std::process;

use structopt::clap::AppSettings;
use structopt::StructOpt;

use starfish::config::parse_count;
use starfish::{render_to_file, RenderConfig};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "starfish-imagegen",
    about = "Render the starfish Julia set to a PNG",
    setting = AppSettings::AllowNegativeNumbers
)]
struct Opt {
    /// Image width and height in pixels
    #[structopt(default_value = "1024")]
    size: String,

    /// Maximum iterations per pixel
    #[structopt(default_value = "1024")]
    iterations: String,

    /// Output PNG path
    #[structopt(parse(from_os_str), default_value = "julia_starfish-node.png")]
    out: PathBuf,

    /// Worker threads [default: physical cores]
    #[structopt(short, long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let (n, m) = match (parse_count(&opt.size), parse_count(&opt.iterations)) {
        (Ok(n), Ok(m)) => (n, m),
        _ => {
            eprintln!("Invalid N or M.");
            process::exit(1);
        }
    };

    let threads = opt.threads.unwrap_or_else(num_cpus::get_physical);
    let config = RenderConfig::square(n, m).with_threads(threads);
    render_to_file(&config, &opt.out)?;

    println!("Wrote {} ({}x{}, M={})", opt.out.display(), n, n, m);
    Ok(())
}
