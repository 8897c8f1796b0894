use tinybasic::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

/// Drains events into the text a terminal would show. Stops at the end
/// of the program, at an `INPUT` prompt, or when a second `Running` in a
/// row shows the program is still looping.
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("?{}\n", error));
                }
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
            }
            Event::Input(ps) => {
                s.push_str(ps);
                break;
            }
            Event::List(ls) => {
                s.push_str(&format!("{}\n", ls));
            }
        }
        prev_running = matches!(event, Event::Running);
    }
    s
}

#[allow(dead_code)]
pub fn exec_str(text: &str) -> String {
    let mut r = Runtime::new();
    r.enter(text);
    exec(&mut r)
}
