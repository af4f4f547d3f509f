mod common;
use assert_fs::prelude::*;
use common::{basic_fs, ok_block};
use dirpick::{Command, Outcome, Session};

fn select_named(
    session: &mut Session,
    names: &[&str],
) {
    session.select_where(|e| names.contains(&e.name.as_str()));
}

#[test]
fn scenario_paths_and_contents() {
    let td = basic_fs();
    let mut session = Session::open(td.path()).unwrap();
    assert_eq!(session.entries().len(), 2);

    select_named(&mut session, &["sub"]);
    assert_eq!(
        session.execute(Command::GeneratePaths).unwrap(),
        Outcome::Generated("sub/\nsub/b.txt".into())
    );

    select_named(&mut session, &["a.txt"]);
    let Outcome::Generated(text) = session.execute(Command::GenerateContents).unwrap() else {
        panic!("expected generated text");
    };
    // Blocks follow checklist (listing) order.
    let expected: Vec<String> = session
        .entries()
        .iter()
        .map(|e| match e.name.as_str() {
            "a.txt" => ok_block("a.txt", "hello"),
            _ => ok_block("sub/b.txt", "world"),
        })
        .collect();
    assert_eq!(text, expected.join("\n"));
}

#[test]
fn refresh_picks_up_new_entries() {
    let td = basic_fs();
    let mut session = Session::open(td.path()).unwrap();
    td.child("empty/now.txt").write_str("filled").unwrap();
    assert_eq!(session.execute(Command::Refresh).unwrap(), Outcome::Listed(3));
}

#[test]
fn failed_refresh_keeps_previous_listing() {
    let td = basic_fs();
    let root = td.path().join("nested");
    std::fs::create_dir_all(root.join("kept")).unwrap();
    std::fs::write(root.join("kept/x.txt"), "x").unwrap();

    let mut session = Session::open(&root).unwrap();
    session.toggle(0);
    std::fs::remove_dir_all(&root).unwrap();

    assert!(session.execute(Command::Refresh).is_err());
    assert_eq!(session.entries().len(), 1);
    assert_eq!(session.selected_count(), 1);
}

#[test]
fn choose_directory_resolves_relative_to_root() {
    let td = basic_fs();
    let mut session = Session::open(td.path()).unwrap();
    let outcome = session
        .execute(Command::ChooseDirectory("sub".into()))
        .unwrap();
    assert_eq!(outcome, Outcome::Listed(1));
    assert!(session.root().ends_with("sub"));
    assert_eq!(session.entries()[0].name, "b.txt");
}

#[test]
fn choose_missing_directory_keeps_root() {
    let td = basic_fs();
    let mut session = Session::open(td.path()).unwrap();
    assert!(
        session
            .execute(Command::ChooseDirectory("missing".into()))
            .is_err()
    );
    assert_eq!(session.root(), td.path());
    assert_eq!(session.entries().len(), 2);
}
