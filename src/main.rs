//! # UVSim
//!
//! Terminal front end for the BasicML virtual machine.
//!

fn main() {
    uvsim::term::main()
}
