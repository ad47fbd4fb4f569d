use mongodb::bson::Bson;

pub(crate) type DatabaseResult<T> = Result<T, DatabaseError>;

/// An error returned by the database layer
#[derive(Debug, Error)]
pub(crate) enum DatabaseError
{
	#[error("database error: {0}")]
	Mongo(#[from] mongodb::error::Error),

	/// The database assigned an `_id` that is not an `ObjectId`.
	#[error("database returned unexpected `_id` value: {0}")]
	UnexpectedId(Bson),

	#[cfg(test)]
	#[error("database is unavailable")]
	Unavailable,
}
