use cmdline::{DefinitionError, OptionFlag, Parameter, Parser, Program, Status, Style, Tags};

use crate::{CopyFiles, Lookup, Media, Search, verbose};

const MEDIA_ARGS: [&str; 10] = [
    "mediaedit",
    "-p",
    "song",
    "--print",
    "artist",
    "--edit",
    "album=Testing the Testers",
    "-v",
    "Test1.mp3",
    "Test2.mp3",
];

const WINDOWS_MEDIA_ARGS: [&str; 10] = [
    "mediaedit",
    "/p",
    "song",
    "/print",
    "artist",
    "/edit",
    "album=Testing the Testers",
    "/v",
    "Test1.mp3",
    "Test2.mp3",
];

fn check_media(media: &Media) {
    assert_eq!(media.program.value(), Some("mediaedit"));

    assert!(media.print.is_specified());
    assert_eq!(media.print.values(), ["song", "artist"]);
    assert_eq!(media.print.param("song").unwrap().value(), Some(""));
    assert_eq!(media.print.param("artist").unwrap().value(), Some(""));
    assert!(!media.print.param("album").unwrap().is_specified());

    assert!(media.edit.is_specified());
    assert_eq!(media.edit.values(), ["album=Testing the Testers"]);
    assert_eq!(
        media.edit.param("album").unwrap().value(),
        Some("Testing the Testers")
    );
    assert!(!media.edit.param("song").unwrap().is_specified());

    assert!(media.verbose.is_specified());
    assert_eq!(media.filenames.values(), ["Test1.mp3", "Test2.mp3"]);
}

#[test]
fn media_unix() {
    let mut media = Media::new();
    let mut parser = media.parser(&MEDIA_ARGS, Style::Unix);

    assert_eq!(parser.parse(), Status::Success);
    assert!(parser.all_mandatory_specified());
    assert!(!parser.help_requested());

    check_media(&media);
}

#[test]
fn media_windows() {
    let mut media = Media::new();
    let mut parser = media.parser(&WINDOWS_MEDIA_ARGS, Style::Windows);

    assert_eq!(parser.parse(), Status::Success);
    assert!(parser.all_mandatory_specified());

    check_media(&media);
}

#[test]
fn media_style_mismatch_fails() {
    let mut media = Media::new();
    let mut parser = media.parser(&MEDIA_ARGS, Style::Windows);
    assert_eq!(parser.parse(), Status::Failure);

    let mut media = Media::new();
    let mut parser = media.parser(&WINDOWS_MEDIA_ARGS, Style::Unix);
    assert_eq!(parser.parse(), Status::Failure);
}

#[test]
fn media_value_option_missing_value() {
    let mut media = Media::new();
    let mut parser = media.parser(&["mediaedit", "Test1.mp3", "--print"], Style::Unix);

    assert_eq!(parser.parse(), Status::Failure);
    assert!(!media.print.is_specified());
    assert!(media.filenames.values().is_empty());
}

#[test]
fn media_options_between_files() {
    let mut media = Media::new();
    let mut parser = media.parser(
        &["mediaedit", "Test1.mp3", "-p", "album=First", "Test2.mp3", "-p", "album=Second"],
        Style::Unix,
    );

    assert_eq!(parser.parse(), Status::Success);

    assert_eq!(media.print.values(), ["album=First", "album=Second"]);
    assert_eq!(media.print.param("album").unwrap().value(), Some("Second"));
    assert_eq!(media.filenames.values(), ["Test1.mp3", "Test2.mp3"]);
}

#[test]
fn search() {
    for (args, style) in [
        (
            ["filesearch", "-i", "test_pattern", "FileToSearch1.txt", "FileToSearch2.txt"],
            Style::Unix,
        ),
        (
            ["filesearch", "/i", "test_pattern", "FileToSearch1.txt", "FileToSearch2.txt"],
            Style::Windows,
        ),
        (
            ["filesearch", "test_pattern", "FileToSearch1.txt", "--ignore-case", "FileToSearch2.txt"],
            Style::Unix,
        ),
    ] {
        let mut search = Search::new();
        let mut parser = search.parser(&args, style);

        assert_eq!(parser.parse(), Status::Success, "{args:?}");
        assert!(parser.all_mandatory_specified());

        assert!(search.ignore_case.is_specified());
        assert_eq!(search.pattern.value(), Some("test_pattern"));
        assert_eq!(
            search.filenames.values(),
            ["FileToSearch1.txt", "FileToSearch2.txt"]
        );
    }
}

#[test]
fn search_without_files_is_incomplete() {
    let mut search = Search::new();
    let mut parser = search.parser(&["filesearch", "test_pattern"], Style::Unix);

    assert_eq!(parser.parse(), Status::Success);
    assert!(!parser.all_mandatory_specified());

    assert_eq!(search.pattern.value(), Some("test_pattern"));
    assert!(!search.filenames.is_specified());
}

#[test]
fn copy() {
    let mut copy = CopyFiles::new();
    let mut parser = copy.parser(&["copy", "-v", "Source1.txt", "Source2.txt", "Destination.txt"]);

    assert_eq!(parser.parse(), Status::Success);
    assert!(parser.all_mandatory_specified());

    assert_eq!(copy.program.value(), Some("copy"));
    assert!(copy.verbose.is_specified());
    assert_eq!(copy.source.values(), ["Source1.txt", "Source2.txt"]);
    assert_eq!(copy.destination.value(), Some("Destination.txt"));
}

#[test]
fn copy_splits_positionals_by_count() {
    // The last positional token always goes to the destination.
    let mut copy = CopyFiles::new();
    let mut parser = copy.parser(&["copy", "Source1.txt", "Source2.txt"]);

    assert_eq!(parser.parse(), Status::Success);
    assert!(parser.all_mandatory_specified());

    assert_eq!(copy.source.values(), ["Source1.txt"]);
    assert_eq!(copy.destination.value(), Some("Source2.txt"));
}

#[test]
fn copy_without_paths_is_incomplete() {
    let mut copy = CopyFiles::new();
    let mut parser = copy.parser(&["copy", "-v"]);

    assert_eq!(parser.parse(), Status::Success);
    assert!(!parser.all_mandatory_specified());

    assert!(copy.verbose.is_specified());
    assert!(!copy.destination.is_specified());
    assert!(!copy.source.is_specified());
}

#[test]
fn copy_with_one_path_fills_destination() {
    let mut copy = CopyFiles::new();
    let mut parser = copy.parser(&["copy", "Destination.txt"]);

    assert_eq!(parser.parse(), Status::Success);
    assert!(!parser.all_mandatory_specified());

    assert_eq!(copy.destination.value(), Some("Destination.txt"));
    assert!(copy.source.values().is_empty());
}

#[test]
fn lookup() {
    let mut lookup = Lookup::new();
    let mut parser = lookup.parser(&["namelookup", "-v", "test.example.com"]);

    assert_eq!(parser.parse(), Status::Success);
    assert!(parser.all_mandatory_specified());

    assert!(lookup.verbose.is_specified());
    assert_eq!(lookup.hostname.value(), Some("test.example.com"));
}

#[test]
fn lookup_without_hostname_is_incomplete() {
    let mut lookup = Lookup::new();
    let mut parser = lookup.parser(&["namelookup", "-v"]);

    assert_eq!(parser.parse(), Status::Success);
    assert!(!parser.all_mandatory_specified());
    assert!(!lookup.hostname.is_specified());
}

#[test]
fn lookup_with_extra_positional_fails() {
    let mut lookup = Lookup::new();
    let mut parser = lookup.parser(&["namelookup", "test.example.com", "other.example.com"]);

    assert_eq!(parser.parse(), Status::Failure);
}

#[test]
fn help_requested() {
    for flag in ["-h", "--help"] {
        let mut lookup = Lookup::new();
        let mut parser = lookup.parser(&["namelookup", flag]);

        assert_eq!(parser.parse(), Status::Success);
        assert!(parser.help_requested());
        assert!(!parser.all_mandatory_specified());
    }
}

#[test]
fn windows_help_requested() {
    for flag in ["/h", "/help"] {
        let mut lookup = Lookup::new();
        let mut parser = lookup.parser(&["namelookup", flag]);
        parser.set_style(Style::Windows);

        assert_eq!(parser.parse(), Status::Success);
        assert!(parser.help_requested());
    }
}

#[test]
fn unknown_option_fails() {
    let mut program = Program::new("prog", "");
    let mut parser = Parser::new(&mut program, ["prog", "--unknown"]).unwrap();
    assert_eq!(parser.parse(), Status::Failure);

    let mut lookup = Lookup::new();
    let mut parser = lookup.parser(&["namelookup", "-x", "test.example.com"]);
    assert_eq!(parser.parse(), Status::Failure);
    assert!(!lookup.hostname.is_specified());
}

#[test]
fn duplicate_option() {
    let mut program = Program::new("prog", "");
    let mut first = verbose();
    let mut second = OptionFlag::new(Tags::Long { long: "verbose" }, "again").unwrap();

    let mut parser = Parser::new(&mut program, ["prog"]).unwrap();
    parser.add_option(&mut first).unwrap();

    assert_eq!(
        parser.add_option(&mut second),
        Err(DefinitionError::DuplicateOption)
    );
}

#[test]
fn parse_runs_once() {
    let mut copy = CopyFiles::new();
    let mut parser = copy.parser(&["copy", "Source1.txt", "Destination.txt"]);

    assert_eq!(parser.parse(), Status::Success);
    assert_eq!(parser.parse(), Status::Failure);

    assert_eq!(copy.source.values(), ["Source1.txt"]);
}
