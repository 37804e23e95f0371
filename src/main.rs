fn main() {
    entregas_pwa::run();
}
