fn main() {
    skilock_frontend::run();
}
