pub mod openshift_client;
