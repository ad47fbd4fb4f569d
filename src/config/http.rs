use {
	serde::{Deserialize, Deserializer, de},
	std::{
		fmt,
		net::{IpAddr, Ipv4Addr, SocketAddr},
	},
	url::Url,
};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct HttpConfig
{
	/// The IP address the server should listen on.
	pub ip: IpAddr,

	/// The port the server should listen on.
	pub port: u16,

	pub cors: CorsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct CorsConfig
{
	/// Whether to answer cross-origin requests at all.
	pub enable: bool,

	/// Origins that may make cross-origin requests, with credentials.
	#[serde(deserialize_with = "deserialize_allowed_origins")]
	pub allowed_origins: Box<[http::HeaderValue]>,
}

impl HttpConfig
{
	/// Returns the [`SocketAddr`] that the HTTP server should listen on.
	pub fn socket_addr(&self) -> SocketAddr
	{
		SocketAddr::new(self.ip, self.port)
	}
}

impl Default for HttpConfig
{
	fn default() -> Self
	{
		Self {
			ip: IpAddr::V4(Ipv4Addr::LOCALHOST),
			port: 8000,
			cors: CorsConfig::default(),
		}
	}
}

impl CorsConfig
{
	pub(crate) fn allowed_origins(&self) -> impl Iterator<Item = http::HeaderValue>
	{
		self.allowed_origins.iter().cloned()
	}
}

impl Default for CorsConfig
{
	fn default() -> Self
	{
		// the frontend's dev server
		Self {
			enable: true,
			allowed_origins: Box::from([
				http::HeaderValue::from_static("http://localhost:5173"),
				http::HeaderValue::from_static("http://127.0.0.1:5173"),
			]),
		}
	}
}

fn deserialize_allowed_origins<'de, D>(
	deserializer: D,
) -> Result<Box<[http::HeaderValue]>, D::Error>
where
	D: Deserializer<'de>,
{
	struct HeaderListVisitor;

	impl<'de> de::Visitor<'de> for HeaderListVisitor
	{
		type Value = Box<[http::HeaderValue]>;

		fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
		{
			fmt.write_str("a list of CORS origins")
		}

		fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
		where
			A: de::SeqAccess<'de>,
		{
			let size_hint = seq.size_hint().unwrap_or_default();
			let mut header_values = Vec::with_capacity(size_hint);

			while let Some(origin) = seq.next_element::<Url>()? {
				// `Url` always adds a trailing slash, browsers never send one
				let origin = origin.origin().ascii_serialization();

				match http::HeaderValue::try_from(origin) {
					Ok(header_value) => header_values.push(header_value),
					Err(err) => {
						return Err(de::Error::custom(format_args!("invalid CORS origin: {err}")));
					},
				}
			}

			Ok(header_values.into_boxed_slice())
		}
	}

	deserializer.deserialize_seq(HeaderListVisitor)
}
