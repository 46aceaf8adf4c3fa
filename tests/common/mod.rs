use assert_cmd::Command;

pub fn tagtype_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagtype").unwrap();
    cmd.env_remove("TAGTYPE_UNTERMINATED");
    cmd.env_remove("RUST_LOG");
    cmd
}
