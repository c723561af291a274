use std::process;

fn main() {
    if let Err(e) = hsearch::driver() {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}
