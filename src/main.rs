fn main() {
    env_logger::init();
    calc::term::main();
}
