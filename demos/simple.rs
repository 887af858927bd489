use tag_cloud_gen::generate_tag_cloud;

fn main() {
    env_logger::init();

    let text = "The cat sat on the mat. The cat ran!";

    let html = generate_tag_cloud(text, "simple.txt", 3).unwrap();

    println!("{}", html);
}
