// One module per console resource.
mod asset;
mod document;
mod membership;
mod obligation;
mod rights_request;
mod snapshot;
