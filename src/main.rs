fn main() {
    logigas_dashboard::start();
}
