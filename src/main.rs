use anyhow::Context as _;
use either::Either;
use genre_wiki::{
    Config, Context, GenreTitles, Renderer, SimpleParser, strip_genre_name_prefix,
};
use std::{
    fs::File,
    io::{BufReader, Read as _},
    path::PathBuf,
};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

fn print_usage() {
    let exe = std::env::args().next().unwrap_or_default();
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    println!("Usage: {exe} [options] [description.txt]\n");
    println!("Reads Wikitext from the file, or from stdin if no file is given.\n");
    println!("Options:");
    println!("    --genre <name>:     Remove the genre name from the start of the description");
    println!("    --genres <file>:    JSON object mapping page titles to genre IDs");
    println!("    --base-url <url>:   Article path for wiki links");
    println!("    --now <time>:       RFC 3339 time used as the current time");
    println!("    --config <file>:    JSON configuration file");
    println!("    --json:             Print the render tree as JSON instead of HTML");
    println!("    --text:             Print plain text instead of HTML");
    println!("    --strict:           Fail on unknown templates instead of truncating\n");
    println!("Environment variables:");
    println!("    GENRE_WIKI_BASE_URL: Same as --base-url");
    println!("    GENRE_WIKI_GENRES:   Same as --genres");
}

fn usage<T>(err: &'static str) -> anyhow::Result<T> {
    print_usage();
    Err(anyhow::Error::msg(err))
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print_usage();
        return Ok(());
    }
    let config_path = args.opt_value_from_str::<_, PathBuf>("--config")?;
    let genre_name = args.opt_value_from_str::<_, String>("--genre")?;
    let genres_path = args.opt_value_from_str::<_, PathBuf>("--genres")?;
    let base_url = args.opt_value_from_str::<_, String>("--base-url")?;
    let now = args.opt_value_from_str::<_, String>("--now")?;
    let json = args.contains("--json");
    let text = args.contains("--text");
    let strict = args.contains("--strict");
    let _ = args.contains("--");
    let input = args.opt_free_from_str::<PathBuf>()?;

    if !args.finish().is_empty() {
        return usage("Unknown extra arguments passed");
    }
    if json && text {
        return usage("--json and --text cannot be used together");
    }

    let mut config = match config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(base_url) = base_url.or_else(|| std::env::var("GENRE_WIKI_BASE_URL").ok()) {
        config.wiki_base_url = Some(base_url);
    }
    if let Some(path) = genres_path.or_else(|| std::env::var_os("GENRE_WIKI_GENRES").map(PathBuf::from)) {
        config.genres = Some(path);
    }

    let genres = match &config.genres {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("could not read genre index '{}'", path.display()))?;
            GenreTitles::from_json(&json)
                .with_context(|| format!("invalid genre index '{}'", path.display()))?
        }
        None => GenreTitles::new(),
    };
    log::info!("loaded {} genre titles", genres.len());

    let mut context = Context::new(&genres).with_wiki_base_url(config.wiki_base_url.as_deref());
    if let Some(now) = now {
        let now = OffsetDateTime::parse(&now, &Rfc3339)
            .with_context(|| format!("invalid --now time '{now}'"))?;
        context = context.with_now(now);
    }

    let mut reader = match &input {
        Some(path) => Either::Left(BufReader::new(
            File::open(path).with_context(|| format!("could not open '{}'", path.display()))?,
        )),
        None => Either::Right(std::io::stdin().lock()),
    };
    let mut wikitext = String::new();
    reader.read_to_string(&mut wikitext)?;
    let wikitext = wikitext.trim();

    let renderer = Renderer::new(&SimpleParser, context).with_limits(config.limits);
    let rendered = if strict {
        let description = match genre_name.as_deref() {
            Some(genre_name) => strip_genre_name_prefix(genre_name, wikitext),
            None => wikitext,
        };
        renderer.render_wikitext(description)?
    } else {
        renderer.render_description(genre_name.as_deref(), wikitext)
    };

    if json {
        serde_json::to_writer_pretty(std::io::stdout().lock(), &rendered)?;
        println!();
    } else if text {
        println!("{}", rendered.plain_text());
    } else {
        println!("{}", rendered.to_html());
    }

    Ok(())
}
