use cmdline::{Parser, Program, Style};
use expect_test::{Expect, expect};

use crate::{CopyFiles, Lookup, Media, Search};

fn check(parser: &Parser<'_>, usage: Expect, help: Expect) {
    usage.assert_eq(&parser.usage().to_string());
    help.assert_eq(&parser.help().to_string());
}

#[test]
fn copy() {
    let mut copy = CopyFiles::new();
    let parser = copy.parser(&["copy"]);

    check(
        &parser,
        expect![[r#"
            Usage:
              copy [options] <source>... <destination>

            Try 'copy --help' for more info
        "#]],
        expect![[r#"
            Usage:
              copy [options] <source>... <destination>

            Description:
              copies one or more files to the specified destination

            Positional Parameters:
              destination                 the destination file path
              source                      the files to copy

            Options:
              -h, --help                  prints detailed help info
              -v, --verbose               prints verbose info
        "#]],
    );
}

#[test]
fn search() {
    let mut search = Search::new();
    let parser = search.parser(&["filesearch"], Style::Unix);

    check(
        &parser,
        expect![[r#"
            Usage:
              filesearch [options] <pattern> <filenames>...

            Try 'filesearch --help' for more info
        "#]],
        expect![[r#"
            Usage:
              filesearch [options] <pattern> <filenames>...

            Description:
              searches files for lines that contain a search pattern

            Positional Parameters:
              pattern                     the file search pattern
              filenames                   the files to search

            Options:
              -h, --help                  prints detailed help info
              -i, --ignore-case           ignores case when searching
        "#]],
    );
}

#[test]
fn media_windows() {
    let mut media = Media::new();
    let parser = media.parser(&["mediaedit"], Style::Windows);

    check(
        &parser,
        expect![[r#"
            Usage:
              mediaedit [options] <filenames>...

            Try 'mediaedit /help' for more info
        "#]],
        expect![[r#"
            Usage:
              mediaedit [options] <filenames>...

            Description:
              prints and edits tags in media files

            Positional Parameters:
              filenames                   the media files to process

            Options:
              /h, /help                   prints detailed help info
              /p, /print                  prints the specified fields

              song                        the title of the song
              artist                      the song artist
              album                       the album of the song

              /e, /edit                   edits the specified fields

              song                        the title of the song
              artist                      the song artist
              album                       the album of the song

              /v, /verbose                prints verbose info
        "#]],
    );
}

#[test]
fn lookup() {
    let mut lookup = Lookup::new();
    let parser = lookup.parser(&["namelookup"]);

    check(
        &parser,
        expect![[r#"
            Usage:
              namelookup [options] <hostname>

            Try 'namelookup --help' for more info
        "#]],
        expect![[r#"
            Usage:
              namelookup [options] <hostname>

            Description:
              looks up the IP address of the specified hostname

            Positional Parameters:
              hostname                    the hostname to look up

            Options:
              -h, --help                  prints detailed help info
              -v, --verbose               prints verbose info
        "#]],
    );
}

#[test]
fn program_without_positionals() {
    let mut program = Program::new("status", "prints the service status");
    let parser = Parser::new(&mut program, ["status"]).unwrap();

    check(
        &parser,
        expect![[r#"
            Usage:
              status [options]

            Try 'status --help' for more info
        "#]],
        expect![[r#"
            Usage:
              status [options]

            Description:
              prints the service status

            Positional Parameters:

            Options:
              -h, --help                  prints detailed help info
        "#]],
    );
}

#[test]
fn help_does_not_depend_on_parsing() {
    let mut lookup = Lookup::new();
    let mut parser = lookup.parser(&["namelookup", "-v", "test.example.com"]);

    let before = parser.help().to_string();
    assert_eq!(parser.parse(), cmdline::Status::Success);

    assert_eq!(parser.help().to_string(), before);
}
