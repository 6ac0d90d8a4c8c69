#[macro_use] extern crate log;
extern crate env_logger;
extern crate clap;
extern crate serde_json;
extern crate tag_editor;

use clap::{App, Arg};
use tag_editor::{import::*, util::arg::Options};
use tag_editor::app::{Config, Dimension, Script, Session};
use std::io::{self, Read, Write};

/// What to print once the script has run
#[derive(Debug)]
struct Output {
    html: bool,
    json: bool,
}

struct Cli {}

impl Cli {

    /// Merge the config file with command line overrides
    pub fn options(o: &Options) -> Res<tag_editor::view::EditorOptions> {
        let mut config = match o.opt("config") {
            Some(path) => Config::read(Path::new(path))?,
            None => Config::default(),
        };
        if let Some(width) = o.opt("width") {
            config.width = Some(Dimension::parse(width)?);
        }
        let tags = o.opt_vec("tag");
        if !tags.is_empty() {
            config.tags = Some(tags.into_iter().map(String::from).collect());
        }
        config.configure()
    }

    pub fn script(o: &Options) -> Res<Script> {
        let mut buffer = String::new();
        match o.opt("SCRIPT") {
            Some(path) => {
                trace!("reading script from {}", path);
                std::fs::File::open(path)?.read_to_string(&mut buffer)?;
            },
            None => {
                trace!("reading script from stdin");
                io::stdin().read_to_string(&mut buffer)?;
            },
        }
        Script::parse(&buffer)
    }

    pub fn run(o: &Options, output: Output) -> Res<()> {
        let options = Self::options(o)?;
        let script = Self::script(o)?;
        trace!("running {} command(s)", script.commands().len());
        let mut session = Session::new(options);
        session.run(&script)?;

        let view = session.view();
        let mut out = io::stdout();
        if output.json {
            writeln!(out, "{}", serde_json::to_string(view.collection().as_slice())?)?;
        } else {
            for name in view.names() {
                writeln!(out, "{}", name)?;
            }
        }
        if output.html {
            writeln!(out, "{}", view.to_html())?;
        }
        Ok(())
    }
}

fn main() {

    env_logger::init();

    trace!("parsing CLI options");
    let args = App::new("tagedit")
        .version("0.1")
        .about("replays input events against a tag editor")
        .author("Felix V.")
        .arg(Arg::with_name("config")
            .help("A yaml config file")
            .short("c")
            .long("config")
            .takes_value(true))
        .arg(Arg::with_name("width")
            .help("Width of the control, e.g. 300px")
            .short("w")
            .long("width")
            .takes_value(true))
        .arg(Arg::with_name("tag")
            .help("An initial tag, may be repeated")
            .short("t")
            .long("tag")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1))
        .arg(Arg::with_name("html")
            .help("Print the rendered markup")
            .long("html"))
        .arg(Arg::with_name("json")
            .help("Print the tags as a json array")
            .long("json"))
        .arg(Arg::with_name("SCRIPT")
            .help("The script to replay, stdin if omitted")
            .index(1))
        .get_matches();

    let options = Options::new(&args);
    let output = Output { html: options.flag("html"), json: options.flag("json") };
    trace!("output: {:?}", output);

    if let Err(e) = Cli::run(&options, output) {
        error!("{}", describe(&e));
        std::process::exit(1);
    }
}
