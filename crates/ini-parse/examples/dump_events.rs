use std::io::{self, BufReader};
use std::process::ExitCode;

use ini_parse::{Error, Handler, Location, Scanner};

/// Prints every event as it is delivered.
struct Dump;

impl Handler for Dump {
    type Error = io::Error;

    fn comment(&mut self, location: &Location, text: &str) -> io::Result<()> {
        println!("{:<4} comment  {}", location.line, text);
        Ok(())
    }

    fn section(&mut self, location: &Location, name: &str) -> io::Result<()> {
        println!("{:<4} section  [{}]", location.line, name);
        Ok(())
    }

    fn key_value(&mut self, location: &Location, key: &str, values: &[String]) -> io::Result<()> {
        println!("{:<4} {:?} {} = {:?}", location.line, location.section, key, values);
        Ok(())
    }
}

fn main() -> ExitCode {
    let stdin = BufReader::new(io::stdin());
    match Scanner::new(stdin).scan(&mut Dump) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Syntax(err)) => {
            eprintln!("syntax error: {}", err);
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(3)
        }
    }
}
