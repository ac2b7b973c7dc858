fn main() {
    prost_build::compile_protos(&["proto/gui_state.proto"], &["proto/"])
        .expect("failed to compile telemetry protobuf schema");
}
