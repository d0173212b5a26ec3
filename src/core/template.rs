//! CloudFormation template rendering.
//!
//! Renders the resource graph for one SSH-reachable instance: a VPC, a
//! public subnet with internet routing, a security group opening the SSH
//! port, a key-pair record carrying the loaded public key, and the instance
//! itself. Parameters are substituted directly at render time; the only
//! provider-resolved parameter is the AMI alias.
//!
//! Rendering is pure: no provider call happens here, and the output is a
//! deterministic function of the configuration and the key.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::core::config::Config;
use crate::core::constants;
use crate::core::key::PublicKey;
use crate::error::{Result, TemplateError};

/// A rendered CloudFormation template document.
#[derive(Debug, Serialize)]
pub struct Template {
    #[serde(rename = "AWSTemplateFormatVersion")]
    format_version: &'static str,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Parameters")]
    parameters: BTreeMap<&'static str, Value>,
    #[serde(rename = "Resources")]
    resources: BTreeMap<&'static str, Value>,
    #[serde(rename = "Outputs")]
    outputs: BTreeMap<&'static str, Value>,
}

/// `{"Ref": id}`
fn refer(id: &str) -> Value {
    json!({ "Ref": id })
}

/// `{"Fn::GetAtt": [id, attr]}`
fn get_att(id: &str, attr: &str) -> Value {
    json!({ "Fn::GetAtt": [id, attr] })
}

impl Template {
    /// Render the template for `config`, embedding `key` in the key-pair
    /// record.
    ///
    /// The caller is expected to have validated `config`; the CIDR
    /// accessors will still refuse unparseable values.
    ///
    /// # Errors
    ///
    /// Returns validation errors from the CIDR accessors.
    pub fn render(config: &Config, key: &PublicKey) -> Result<Self> {
        let vpc_cidr = config.vpc_cidr()?;
        let subnet_cidr = config.subnet_cidr()?;
        let ssh_ingress = config.ssh_ingress_cidr()?;
        let stack_name = &config.stack.name;

        debug!(stack = %stack_name, fingerprint = %key.fingerprint(), "rendering template");

        let mut parameters = BTreeMap::new();
        parameters.insert(
            "LatestAmiId",
            json!({
                "Type": "AWS::SSM::Parameter::Value<AWS::EC2::Image::Id>",
                "Default": constants::AMI_SSM_ALIAS,
                "Description": "Latest Amazon Linux AMI, resolved by the provider"
            }),
        );

        let mut resources = BTreeMap::new();

        resources.insert(
            "Vpc",
            json!({
                "Type": "AWS::EC2::VPC",
                "Properties": {
                    "CidrBlock": vpc_cidr.to_string(),
                    "EnableDnsSupport": true,
                    "EnableDnsHostnames": true,
                    "Tags": [{ "Key": "Name", "Value": format!("{}-vpc", stack_name) }]
                }
            }),
        );

        resources.insert(
            "Subnet",
            json!({
                "Type": "AWS::EC2::Subnet",
                "Properties": {
                    "VpcId": refer("Vpc"),
                    "CidrBlock": subnet_cidr.to_string(),
                    "AvailabilityZone": config.network.availability_zone,
                    "MapPublicIpOnLaunch": true,
                    "Tags": [{ "Key": "Name", "Value": format!("{}-subnet", stack_name) }]
                }
            }),
        );

        resources.insert(
            "InternetGateway",
            json!({ "Type": "AWS::EC2::InternetGateway" }),
        );

        resources.insert(
            "GatewayAttachment",
            json!({
                "Type": "AWS::EC2::VPCGatewayAttachment",
                "Properties": {
                    "VpcId": refer("Vpc"),
                    "InternetGatewayId": refer("InternetGateway")
                }
            }),
        );

        resources.insert(
            "PublicRouteTable",
            json!({
                "Type": "AWS::EC2::RouteTable",
                "Properties": { "VpcId": refer("Vpc") }
            }),
        );

        resources.insert(
            "DefaultRoute",
            json!({
                "Type": "AWS::EC2::Route",
                "DependsOn": "GatewayAttachment",
                "Properties": {
                    "RouteTableId": refer("PublicRouteTable"),
                    "DestinationCidrBlock": "0.0.0.0/0",
                    "GatewayId": refer("InternetGateway")
                }
            }),
        );

        resources.insert(
            "SubnetRouteAssociation",
            json!({
                "Type": "AWS::EC2::SubnetRouteTableAssociation",
                "Properties": {
                    "SubnetId": refer("Subnet"),
                    "RouteTableId": refer("PublicRouteTable")
                }
            }),
        );

        resources.insert(
            "SshSecurityGroup",
            json!({
                "Type": "AWS::EC2::SecurityGroup",
                "Properties": {
                    "GroupDescription": format!("SSH access to {}", stack_name),
                    "VpcId": refer("Vpc"),
                    "SecurityGroupIngress": [{
                        "IpProtocol": "tcp",
                        "FromPort": constants::SSH_PORT,
                        "ToPort": constants::SSH_PORT,
                        "CidrIp": ssh_ingress.to_string()
                    }]
                }
            }),
        );

        // The injection point: only the public half of the pair ever
        // appears in the rendered document.
        resources.insert(
            "KeyPair",
            json!({
                "Type": "AWS::EC2::KeyPair",
                "Properties": {
                    "KeyName": config.instance.key_name,
                    "PublicKeyMaterial": key.to_authorized_key()
                }
            }),
        );

        resources.insert(
            "Instance",
            json!({
                "Type": "AWS::EC2::Instance",
                "DependsOn": "DefaultRoute",
                "Properties": {
                    "InstanceType": config.instance.instance_type,
                    "ImageId": refer("LatestAmiId"),
                    "KeyName": refer("KeyPair"),
                    "SubnetId": refer("Subnet"),
                    "SecurityGroupIds": [get_att("SshSecurityGroup", "GroupId")],
                    "Tags": [{ "Key": "Name", "Value": stack_name }]
                }
            }),
        );

        let mut outputs = BTreeMap::new();
        outputs.insert(
            "InstanceId",
            json!({ "Description": "Instance identifier", "Value": refer("Instance") }),
        );
        outputs.insert(
            "PublicIp",
            json!({
                "Description": "Public address of the instance",
                "Value": get_att("Instance", "PublicIp")
            }),
        );
        outputs.insert(
            "SshCommand",
            json!({
                "Description": "Ready-to-paste login command",
                "Value": { "Fn::Sub": "ssh ec2-user@${Instance.PublicIp}" }
            }),
        );

        Ok(Self {
            format_version: "2010-09-09",
            description: format!("gangway: SSH-reachable instance for stack {}", stack_name),
            parameters,
            resources,
            outputs,
        })
    }

    /// Serialize as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self).map_err(TemplateError::Serialize)?)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(TemplateError::Serialize)?)
    }

    /// Logical ids of all defined resources.
    pub fn logical_ids(&self) -> Vec<&'static str> {
        self.resources.keys().copied().collect()
    }
}
