use tonic_build::manual::{Builder, Method, Service};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");

    // Messages are declared by hand in src/proto.rs, so only the service
    // glue is generated here and no protoc is needed.
    let method = |name: &str, route: &str, input: &str, output: &str| {
        Method::builder()
            .name(name)
            .route_name(route)
            .input_type(input)
            .output_type(output)
            .codec_path("tonic::codec::ProstCodec")
            .build()
    };

    let service = Service::builder()
        .name("Plugin")
        .package("opentalon.plugin.v1")
        .method(method(
            "capabilities",
            "Capabilities",
            "crate::proto::Empty",
            "crate::proto::Capabilities",
        ))
        .method(method(
            "execute",
            "Execute",
            "crate::proto::Request",
            "crate::proto::Response",
        ))
        .method(method(
            "check_health",
            "CheckHealth",
            "crate::proto::Empty",
            "crate::proto::Empty",
        ))
        .build();

    // Output lands in OUT_DIR as opentalon.plugin.v1.Plugin.rs.
    Builder::new()
        .build_server(true)
        .build_client(false)
        .compile(&[service]);

    Ok(())
}
