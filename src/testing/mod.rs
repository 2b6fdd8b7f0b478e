mod fake_transport;
mod manifests;

pub use fake_transport::FakeTransport;
pub use manifests::sample_manifest;
