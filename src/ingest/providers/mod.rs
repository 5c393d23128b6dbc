pub mod newsdata;
