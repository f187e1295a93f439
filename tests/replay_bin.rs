use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn replay_answer_is_read_after_a_human_match() {
    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join("results.jsonl");

    // every cell once, then decline the rematch
    let mut script = String::new();
    for y in 0..6 {
        for x in 0..6 {
            script.push_str(&format!("{} {}\n", x, y));
        }
    }
    script.push_str("n\n");

    let mut child = Command::new(env!("CARGO_BIN_EXE_seabattle"))
        .args(["--difficulty", "easy", "--mode", "human", "--seed", "5", "--results"])
        .arg(&results)
        .env("SEABATTLE_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run seabattle binary");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {}", stderr);
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("Play again? (y/n): "));
    assert!(stdout.contains("Thanks for playing!"));
    let saved = std::fs::read_to_string(&results).unwrap();
    assert_eq!(saved.lines().count(), 1);
}
