#[cfg(not(target_os = "android"))]
fn main() -> anyhow::Result<()> {
    style_atlas::launch_desktop()
}

#[cfg(target_os = "android")]
fn main() {
    style_atlas::launch_mobile();
}
