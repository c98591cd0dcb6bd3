use super::{run, run_failing};
use crate::memory::MemoryError;
use crate::vm::ExecutionError;

const HELLO_WORLD: &str = "\
    ++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++\
    .>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.\
    ------.--------.>+.>.";

const HELLO_WORLD_SCRATCH_CELLS: &str = "\
    >+++++++++[<++++++++>-]<.>+++++++[<++++>-]<+.+++++++..+++.>>>++++++++[<++++>-]\
    <.>>>++++++++++[<+++++++++>-]<---.<<<<.+++.------.--------.>>+.>++++++++++.";

#[test]
fn hello_world() {
    run(HELLO_WORLD, &[], b"Hello World!\n", 0);
}

#[test]
fn hello_world_with_scratch_cells() {
    run(HELLO_WORLD_SCRATCH_CELLS, &[], b"Hello World!\n", 0);
}

#[test]
fn hello_world_with_comments() {
    run(
        "
        Set up the counters
        ++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]

        Print: each cell holds one letter (roughly)
        >>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.
        ",
        &[],
        b"Hello World!\n",
        0,
    );
}

#[test]
fn comment_noise_between_instructions() {
    run(
        "++++h+++e+[l>++++l[o>++>+++> +++W>+<o<<<-]>+>+>->>+r[<]<-l]>>.>---.++d+++++.!.+++.>>.<\n\
         -.<.++t+.h--is\tcode----.--works------.>>+!.>++.",
        &[],
        b"Hello World!\n",
        0,
    );
}

#[test]
fn echo_until_empty_line() {
    run(",[.,]", &["h", "e", "llo", "y", ""], b"hely", 5);
}

#[test]
fn unread_input_is_left_alone() {
    run(",.", &["a", "b", "c"], b"a", 1);
}

#[test]
fn add_two_digits() {
    run(
        ",>,[<+>-]<------------------------------------------------.",
        &["3", "4"],
        b"7",
        2,
    );
}

#[test]
fn multiply() {
    run("++++[>+++++<-]>.", &[], &[20], 0);
}

#[test]
fn nested_loops() {
    run("+[-+[-><]+-],.", &["a"], b"a", 1);
    run("++[>++[>++<-]<-]>>.", &[], &[8], 0);
}

#[test]
fn cells_wrap() {
    run("-.", &[], &[255], 0);
    run(&"+".repeat(257), &[], &[], 0);
    run(&format!("{}.", "+".repeat(257)), &[], &[1], 0);
}

#[test]
fn skipped_loop_never_runs() {
    run("[,.]+.", &["x"], &[1], 0);
}

#[test]
fn repeated_output() {
    run("++++++++[>++++++++<-]>+...", &[], b"AAA", 0);
}

#[test]
fn far_right_cells() {
    run(&format!("{}+.{}.", ">".repeat(10_000), "<".repeat(10_000)), &[], &[1, 0], 0);
}

#[test]
fn underflow_after_output() {
    let error = run_failing("+++.>+.<<", &[], &[3, 1]);

    assert!(matches!(
        error,
        ExecutionError::Memory(MemoryError::Underflow { head: 1, distance: 2 })
    ));
}

#[test]
fn input_exhausted() {
    let error = run_failing(",.,.,.", &["a", "b"], b"ab");

    assert!(matches!(
        error,
        ExecutionError::UnexpectedEndOfInput { position: 4 }
    ));
}
