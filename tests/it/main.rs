mod help;
mod parse;

use cmdline::{
    MultiPositional, OptionFlag, OptionParam, Order, Parser, Positional, Program, Style, Tags,
    ValueOption,
};

fn verbose() -> OptionFlag {
    OptionFlag::new(
        Tags::LongShort {
            long: "verbose",
            short: 'v',
        },
        "prints verbose info",
    )
    .unwrap()
}

fn field_option(long: &str, short: char, description: &str) -> ValueOption {
    ValueOption::new(Tags::LongShort { long, short }, description)
        .unwrap()
        .with_param(OptionParam::new("song", "the title of the song").unwrap())
        .unwrap()
        .with_param(OptionParam::new("artist", "the song artist").unwrap())
        .unwrap()
        .with_param(OptionParam::new("album", "the album of the song").unwrap())
        .unwrap()
}

/// `mediaedit [options] <filenames>...`
struct Media {
    program: Program,
    print: ValueOption,
    edit: ValueOption,
    verbose: OptionFlag,
    filenames: MultiPositional,
}

impl Media {
    fn new() -> Self {
        Self {
            program: Program::new("mediaedit", "prints and edits tags in media files"),
            print: field_option("print", 'p', "prints the specified fields"),
            edit: field_option("edit", 'e', "edits the specified fields"),
            verbose: verbose(),
            filenames: MultiPositional::new("filenames", "the media files to process")
                .unwrap()
                .mandatory(),
        }
    }

    fn parser(&mut self, args: &[&str], style: Style) -> Parser<'_> {
        let mut parser = Parser::new(&mut self.program, args.iter().copied()).unwrap();
        parser.add_option(&mut self.print).unwrap();
        parser.add_option(&mut self.edit).unwrap();
        parser.add_option(&mut self.verbose).unwrap();
        parser.set_multi_positional(&mut self.filenames);
        parser.set_style(style);
        parser
    }
}

/// `filesearch [options] <pattern> <filenames>...`
struct Search {
    program: Program,
    ignore_case: OptionFlag,
    pattern: Positional,
    filenames: MultiPositional,
}

impl Search {
    fn new() -> Self {
        Self {
            program: Program::new(
                "filesearch",
                "searches files for lines that contain a search pattern",
            ),
            ignore_case: OptionFlag::new(
                Tags::LongShort {
                    long: "ignore-case",
                    short: 'i',
                },
                "ignores case when searching",
            )
            .unwrap(),
            pattern: Positional::new("pattern", "the file search pattern")
                .unwrap()
                .mandatory(),
            filenames: MultiPositional::new("filenames", "the files to search")
                .unwrap()
                .mandatory(),
        }
    }

    fn parser(&mut self, args: &[&str], style: Style) -> Parser<'_> {
        let mut parser = Parser::new(&mut self.program, args.iter().copied()).unwrap();
        parser.add_option(&mut self.ignore_case).unwrap();
        parser.add_positional(&mut self.pattern).unwrap();
        parser.set_multi_positional(&mut self.filenames);
        parser.set_style(style);
        parser
    }
}

/// `copy [options] <source>... <destination>`
struct CopyFiles {
    program: Program,
    verbose: OptionFlag,
    destination: Positional,
    source: MultiPositional,
}

impl CopyFiles {
    fn new() -> Self {
        Self {
            program: Program::new("copy", "copies one or more files to the specified destination"),
            verbose: verbose(),
            destination: Positional::new("destination", "the destination file path")
                .unwrap()
                .mandatory(),
            source: MultiPositional::new("source", "the files to copy")
                .unwrap()
                .mandatory()
                .with_order(Order::AfterOptions),
        }
    }

    fn parser(&mut self, args: &[&str]) -> Parser<'_> {
        let mut parser = Parser::new(&mut self.program, args.iter().copied()).unwrap();
        parser.add_option(&mut self.verbose).unwrap();
        parser.add_positional(&mut self.destination).unwrap();
        parser.set_multi_positional(&mut self.source);
        parser
    }
}

/// `namelookup [options] <hostname>`
struct Lookup {
    program: Program,
    verbose: OptionFlag,
    hostname: Positional,
}

impl Lookup {
    fn new() -> Self {
        Self {
            program: Program::new(
                "namelookup",
                "looks up the IP address of the specified hostname",
            ),
            verbose: verbose(),
            hostname: Positional::new("hostname", "the hostname to look up")
                .unwrap()
                .mandatory(),
        }
    }

    fn parser(&mut self, args: &[&str]) -> Parser<'_> {
        let mut parser = Parser::new(&mut self.program, args.iter().copied()).unwrap();
        parser.add_option(&mut self.verbose).unwrap();
        parser.add_positional(&mut self.hostname).unwrap();
        parser
    }
}
