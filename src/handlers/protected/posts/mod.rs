// handlers/protected/posts/mod.rs - Post management for the token identity
//
// The owner of every post touched here is the AuthUser injected by the
// authentication middleware, never a client-supplied id.

pub mod create; // POST /post
pub mod delete; // DELETE /post/:id
pub mod list; // GET /get

pub use create::post_create;
pub use delete::post_delete;
pub use list::posts_list;
